//! Environment data-access port.
//!
//! Reward functions never touch the simulator directly; they read commands and
//! base velocities through [`VelocityEnv`]. The training framework provides a
//! live adapter, tests use [`RecordedEnv`] with plain in-memory vectors.

use nalgebra::Vector3;
use std::collections::HashMap;

/// Read access to the per-instance command and base-velocity state of a
/// vectorized training environment.
///
/// All three accessors return one triple per environment instance, in a
/// stable instance order.
pub trait VelocityEnv {
    /// Velocity commands on the named command channel:
    /// (lin_vel_x, lin_vel_y, ang_vel_z) per instance.
    fn commands(&self, command_name: &str) -> Vec<Vector3<f64>>;

    /// Base linear velocity (x, y, z) per instance.
    fn base_lin_vel(&self) -> Vec<Vector3<f64>>;

    /// Base angular velocity (x, y, z) per instance.
    fn base_ang_vel(&self) -> Vec<Vector3<f64>>;
}

/// In-memory [`VelocityEnv`] backed by captured or hand-built vectors.
#[derive(Debug, Clone, Default)]
pub struct RecordedEnv {
    commands: HashMap<String, Vec<Vector3<f64>>>,
    lin_vel: Vec<Vector3<f64>>,
    ang_vel: Vec<Vector3<f64>>,
}

impl RecordedEnv {
    /// Create a recorded environment from base velocities.
    pub fn new(lin_vel: Vec<Vector3<f64>>, ang_vel: Vec<Vector3<f64>>) -> Self {
        Self {
            commands: HashMap::new(),
            lin_vel,
            ang_vel,
        }
    }

    /// Attach a command channel.
    pub fn with_commands(mut self, name: &str, commands: Vec<Vector3<f64>>) -> Self {
        self.commands.insert(name.to_string(), commands);
        self
    }
}

impl VelocityEnv for RecordedEnv {
    fn commands(&self, command_name: &str) -> Vec<Vector3<f64>> {
        self.commands.get(command_name).cloned().unwrap_or_default()
    }

    fn base_lin_vel(&self) -> Vec<Vector3<f64>> {
        self.lin_vel.clone()
    }

    fn base_ang_vel(&self) -> Vec<Vector3<f64>> {
        self.ang_vel.clone()
    }
}
