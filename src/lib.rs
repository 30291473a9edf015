//! robot-lab — training-scenario configuration for legged robot RL.
//!
//! Three pieces, all consumed by an external simulator/RL framework:
//!
//! * [`rewards`] — reward shaping for velocity-command locomotion: penalties
//!   for moving without a command and a stay-still reward, gated by command
//!   magnitude.
//! * [`assets`] / [`articulation`] — declarative articulation configurations
//!   for the Unitree robot family (joint gains, actuator limits, initial
//!   poses), consumed at environment-construction time.
//! * [`registry`] — gym-style task registration mapping task ids to
//!   environment and agent configuration entry points.
//!
//! Physics, environment stepping, and the PPO/AMP training loops live in the
//! external framework; this crate only configures them.

pub mod articulation;
pub mod assets;
pub mod config;
pub mod env;
pub mod registry;
pub mod rewards;

pub use articulation::{ActuatorConfig, ArticulationConfig, Gain};
pub use env::{RecordedEnv, VelocityEnv};
pub use registry::{register_default_tasks, TaskDefinition, TaskRegistry};
pub use rewards::{
    ang_vel_without_cmd, lin_vel_without_cmd, stay_still_reward, DEFAULT_COMMAND_THRESHOLD,
    DEFAULT_VELOCITY_THRESHOLD,
};
