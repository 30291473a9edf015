//! Reward shaping for velocity-command locomotion tasks.
//!
//! All three functions share the same command gate: an instance whose command
//! triple (lin_x, lin_y, ang_z) has a combined norm below `command_threshold`
//! is treated as "no motion requested", and only those instances are penalized
//! or rewarded. The combined linear+angular norm matches the training setup
//! these rewards were tuned against.
//!
//! Each function returns the mean per-instance value, or 0.0 when the
//! environment has no instances.

use crate::env::VelocityEnv;

/// Command magnitude below which no motion is considered requested.
pub const DEFAULT_COMMAND_THRESHOLD: f64 = 0.05;

/// Velocity magnitude below which the robot is considered stationary.
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.05;

/// Penalize any base angular velocity while no command is active.
///
/// Per instance: `-‖ang_vel‖` when the command gate is closed, 0.0 otherwise.
pub fn ang_vel_without_cmd(
    env: &dyn VelocityEnv,
    command_name: &str,
    command_threshold: f64,
) -> f64 {
    let commands = env.commands(command_name);
    let ang_vel = env.base_ang_vel();

    if commands.is_empty() {
        return 0.0;
    }

    let total: f64 = commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            if cmd.norm() < command_threshold {
                -ang_vel[i].norm()
            } else {
                0.0
            }
        })
        .sum();

    total / commands.len() as f64
}

/// Penalize any base linear velocity while no command is active.
///
/// Per instance: `-‖lin_vel‖` when the command gate is closed, 0.0 otherwise.
pub fn lin_vel_without_cmd(
    env: &dyn VelocityEnv,
    command_name: &str,
    command_threshold: f64,
) -> f64 {
    let commands = env.commands(command_name);
    let lin_vel = env.base_lin_vel();

    if commands.is_empty() {
        return 0.0;
    }

    let total: f64 = commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            if cmd.norm() < command_threshold {
                -lin_vel[i].norm()
            } else {
                0.0
            }
        })
        .sum();

    total / commands.len() as f64
}

/// Reward standing still while no command is active.
///
/// Per instance with the gate closed, the combined velocity magnitude is
/// normalized to `(‖lin_vel‖ + ‖ang_vel‖) / (2 * velocity_threshold)`; the
/// reward is `1.0` at perfect rest, falls off linearly, and is 0.0 once that
/// factor reaches 1.0. Instances with an active command get 0.0.
pub fn stay_still_reward(
    env: &dyn VelocityEnv,
    command_name: &str,
    command_threshold: f64,
    velocity_threshold: f64,
) -> f64 {
    let commands = env.commands(command_name);
    let lin_vel = env.base_lin_vel();
    let ang_vel = env.base_ang_vel();

    if commands.is_empty() {
        return 0.0;
    }

    let total: f64 = commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            if cmd.norm() >= command_threshold {
                return 0.0;
            }
            let velocity_factor =
                (lin_vel[i].norm() + ang_vel[i].norm()) / (2.0 * velocity_threshold);
            if velocity_factor < 1.0 {
                1.0 - velocity_factor
            } else {
                0.0
            }
        })
        .sum();

    total / commands.len() as f64
}
