//! Unitree robot catalog.
//!
//! Articulation configurations for the Unitree quadrupeds (A1, Go2, Go2W, B2,
//! B2W) and the G1 humanoid variants. Values follow the vendor reference
//! parameters; USD paths are relative to the simulator's asset root.
//!
//! Reference: https://github.com/unitreerobotics/unitree_ros

use std::collections::HashMap;

use crate::articulation::{
    joint_map, ActuatorConfig, ArticulationConfig, ArticulationRootProps, Gain, InitialState,
    RigidBodyProps, SpawnConfig,
};

fn default_rigid_props() -> RigidBodyProps {
    RigidBodyProps {
        disable_gravity: false,
        retain_accelerations: false,
        linear_damping: 0.0,
        angular_damping: 0.0,
        max_linear_velocity: 1000.0,
        max_angular_velocity: 1000.0,
        max_depenetration_velocity: 1.0,
    }
}

fn default_root_props() -> ArticulationRootProps {
    ArticulationRootProps {
        enabled_self_collisions: false,
        solver_position_iteration_count: 4,
        solver_velocity_iteration_count: 0,
    }
}

fn spawn(usd_path: &str, rigid: RigidBodyProps, root: ArticulationRootProps) -> SpawnConfig {
    SpawnConfig {
        usd_path: usd_path.to_string(),
        activate_contact_sensors: true,
        rigid,
        articulation_root: root,
    }
}

/// Standing pose shared by the quadrupeds.
fn quadruped_joint_pos() -> HashMap<String, f64> {
    joint_map(&[
        (".*L_hip_joint", 0.0),
        (".*R_hip_joint", -0.0),
        ("F.*_thigh_joint", 0.8),
        ("R.*_thigh_joint", 0.8),
        (".*_calf_joint", -1.5),
    ])
}

fn zero_joint_vel() -> HashMap<String, f64> {
    joint_map(&[(".*", 0.0)])
}

/// Unitree A1 with a DC motor model for the legs.
///
/// Specifications taken from: https://www.trossenrobotics.com/a1-quadruped#specifications
pub fn unitree_a1() -> ArticulationConfig {
    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/A1/a1.usd",
            default_rigid_props(),
            default_root_props(),
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.38],
            joint_pos: quadruped_joint_pos(),
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: HashMap::from([(
            "legs".to_string(),
            ActuatorConfig::DcMotor {
                joint_names_expr: vec![".*_joint".to_string()],
                effort_limit: 33.5,
                saturation_effort: 33.5,
                velocity_limit: 21.0,
                stiffness: 20.0,
                damping: 0.5,
                friction: 0.0,
            },
        )]),
    }
}

/// Unitree Go2 with a DC motor model for the legs.
pub fn unitree_go2() -> ArticulationConfig {
    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/Go2/go2.usd",
            default_rigid_props(),
            default_root_props(),
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.38],
            joint_pos: quadruped_joint_pos(),
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: HashMap::from([(
            "legs".to_string(),
            ActuatorConfig::DcMotor {
                joint_names_expr: vec![".*".to_string()],
                effort_limit: 23.5,
                saturation_effort: 23.5,
                velocity_limit: 30.0,
                stiffness: 25.0,
                damping: 0.5,
                friction: 0.0,
            },
        )]),
    }
}

/// Unitree Go2W — Go2 with wheeled feet.
pub fn unitree_go2w() -> ArticulationConfig {
    let mut joint_pos = quadruped_joint_pos();
    joint_pos.insert(".*_foot_joint".to_string(), 0.0);

    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/Go2W/go2w.usd",
            default_rigid_props(),
            default_root_props(),
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.45],
            joint_pos,
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: HashMap::from([
            (
                "legs".to_string(),
                ActuatorConfig::DcMotor {
                    joint_names_expr: vec!["^(?!.*_foot_joint).*".to_string()],
                    effort_limit: 23.5,
                    saturation_effort: 23.5,
                    velocity_limit: 30.0,
                    stiffness: 25.0,
                    damping: 0.5,
                    friction: 0.0,
                },
            ),
            (
                "wheels".to_string(),
                ActuatorConfig::DcMotor {
                    joint_names_expr: vec![".*_foot_joint".to_string()],
                    effort_limit: 23.5,
                    saturation_effort: 23.5,
                    velocity_limit: 30.0,
                    stiffness: 0.0,
                    damping: 0.5,
                    friction: 0.0,
                },
            ),
        ]),
    }
}

fn b2_leg_actuators() -> Vec<(String, ActuatorConfig)> {
    vec![
        (
            "hip".to_string(),
            ActuatorConfig::DcMotor {
                joint_names_expr: vec![".*_hip_joint".to_string()],
                effort_limit: 200.0,
                saturation_effort: 200.0,
                velocity_limit: 23.0,
                stiffness: 160.0,
                damping: 5.0,
                friction: 0.0,
            },
        ),
        (
            "thigh".to_string(),
            ActuatorConfig::DcMotor {
                joint_names_expr: vec![".*_thigh_joint".to_string()],
                effort_limit: 200.0,
                saturation_effort: 200.0,
                velocity_limit: 23.0,
                stiffness: 160.0,
                damping: 5.0,
                friction: 0.0,
            },
        ),
        (
            "calf".to_string(),
            ActuatorConfig::DcMotor {
                joint_names_expr: vec![".*_calf_joint".to_string()],
                effort_limit: 320.0,
                saturation_effort: 320.0,
                velocity_limit: 14.0,
                stiffness: 160.0,
                damping: 5.0,
                friction: 0.0,
            },
        ),
    ]
}

/// Unitree B2 with per-group DC motors.
pub fn unitree_b2() -> ArticulationConfig {
    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/B2/b2.usd",
            default_rigid_props(),
            default_root_props(),
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.58],
            joint_pos: quadruped_joint_pos(),
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: b2_leg_actuators().into_iter().collect(),
    }
}

/// Unitree B2W — B2 with wheeled feet.
pub fn unitree_b2w() -> ArticulationConfig {
    let mut joint_pos = quadruped_joint_pos();
    joint_pos.insert(".*_foot_joint".to_string(), 0.0);

    let mut actuators: HashMap<String, ActuatorConfig> = b2_leg_actuators().into_iter().collect();
    actuators.insert(
        "wheel".to_string(),
        ActuatorConfig::DcMotor {
            joint_names_expr: vec![".*_foot_joint".to_string()],
            effort_limit: 20.0,
            saturation_effort: 20.0,
            velocity_limit: 50.0,
            stiffness: 0.0,
            damping: 1.0,
            friction: 0.0,
        },
    );

    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/B2W/b2w.usd",
            default_rigid_props(),
            default_root_props(),
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.65],
            joint_pos,
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators,
    }
}

/// Unitree G1, 29-DOF revision, with implicit PD actuators.
pub fn unitree_g1() -> ArticulationConfig {
    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/G1/g1_29dof_rev_1_0.usd",
            RigidBodyProps {
                disable_gravity: false,
                retain_accelerations: false,
                linear_damping: 0.0,
                angular_damping: 0.0,
                max_linear_velocity: 3.0,
                max_angular_velocity: 3.0,
                max_depenetration_velocity: 10.0,
            },
            default_root_props(),
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.8],
            joint_pos: joint_map(&[
                (".*_hip_pitch_joint", -0.20),
                (".*_knee_joint", 0.42),
                (".*_ankle_pitch_joint", -0.23),
                ("left_shoulder_roll_joint", 0.16),
                ("left_shoulder_pitch_joint", 0.35),
                ("right_shoulder_roll_joint", -0.16),
                ("right_shoulder_pitch_joint", 0.35),
            ]),
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: HashMap::from([
            (
                "legs".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: vec![
                        ".*_hip_yaw_joint".to_string(),
                        ".*_hip_roll_joint".to_string(),
                        ".*_hip_pitch_joint".to_string(),
                        ".*_knee_joint".to_string(),
                        "waist_yaw_joint".to_string(),
                        "waist_roll_joint".to_string(),
                        "waist_pitch_joint".to_string(),
                    ],
                    effort_limit: Some(300.0),
                    velocity_limit: Some(100.0),
                    stiffness: Gain::PerJoint(joint_map(&[
                        (".*_hip_yaw_joint", 150.0),
                        (".*_hip_roll_joint", 150.0),
                        (".*_hip_pitch_joint", 200.0),
                        (".*_knee_joint", 200.0),
                        ("waist_yaw_joint", 200.0),
                        ("waist_roll_joint", 200.0),
                        ("waist_pitch_joint", 200.0),
                    ])),
                    damping: Gain::Uniform(5.0),
                    armature: Gain::PerJoint(joint_map(&[
                        (".*_hip_.*", 0.01),
                        (".*_knee_joint", 0.01),
                        ("waist_yaw_joint", 0.01),
                        ("waist_roll_joint", 0.01),
                        ("waist_pitch_joint", 0.01),
                    ])),
                },
            ),
            (
                "feet".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: vec![
                        ".*_ankle_pitch_joint".to_string(),
                        ".*_ankle_roll_joint".to_string(),
                    ],
                    effort_limit: Some(20.0),
                    velocity_limit: None,
                    stiffness: Gain::Uniform(20.0),
                    damping: Gain::Uniform(2.0),
                    armature: Gain::Uniform(0.01),
                },
            ),
            (
                "arms".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: vec![
                        ".*_shoulder_pitch_joint".to_string(),
                        ".*_shoulder_roll_joint".to_string(),
                        ".*_shoulder_yaw_joint".to_string(),
                        ".*_elbow_joint".to_string(),
                        ".*_wrist_.*".to_string(),
                    ],
                    effort_limit: Some(300.0),
                    velocity_limit: Some(100.0),
                    stiffness: Gain::Uniform(40.0),
                    damping: Gain::Uniform(10.0),
                    armature: Gain::PerJoint(joint_map(&[
                        (".*_shoulder_.*", 0.01),
                        (".*_elbow_.*", 0.01),
                        (".*_wrist_.*", 0.01),
                    ])),
                },
            ),
        ]),
    }
}

/// Finger joint patterns on the hand-equipped G1 variants.
fn g1_hand_joint_exprs() -> Vec<String> {
    [
        ".*_five_joint",
        ".*_three_joint",
        ".*_six_joint",
        ".*_four_joint",
        ".*_zero_joint",
        ".*_one_joint",
        ".*_two_joint",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn g1_arm_joint_exprs() -> Vec<String> {
    let mut exprs = vec![
        ".*_shoulder_pitch_joint".to_string(),
        ".*_shoulder_roll_joint".to_string(),
        ".*_shoulder_yaw_joint".to_string(),
        ".*_elbow_pitch_joint".to_string(),
        ".*_elbow_roll_joint".to_string(),
    ];
    exprs.extend(g1_hand_joint_exprs());
    exprs
}

fn g1_torso_leg_joint_exprs() -> Vec<String> {
    vec![
        ".*_hip_yaw_joint".to_string(),
        ".*_hip_roll_joint".to_string(),
        ".*_hip_pitch_joint".to_string(),
        ".*_knee_joint".to_string(),
        "torso_joint".to_string(),
    ]
}

fn g1_torso_leg_stiffness() -> Gain {
    Gain::PerJoint(joint_map(&[
        (".*_hip_yaw_joint", 150.0),
        (".*_hip_roll_joint", 150.0),
        (".*_hip_pitch_joint", 200.0),
        (".*_knee_joint", 200.0),
        ("torso_joint", 200.0),
    ]))
}

/// Unitree G1 with articulated hands (torso-joint model).
pub fn unitree_g1_hands() -> ArticulationConfig {
    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/G1/g1.usd",
            default_rigid_props(),
            ArticulationRootProps {
                enabled_self_collisions: false,
                solver_position_iteration_count: 8,
                solver_velocity_iteration_count: 4,
            },
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.74],
            joint_pos: joint_map(&[
                (".*_hip_pitch_joint", -0.20),
                (".*_knee_joint", 0.42),
                (".*_ankle_pitch_joint", -0.23),
                (".*_elbow_pitch_joint", 0.87),
                ("left_shoulder_roll_joint", 0.16),
                ("left_shoulder_pitch_joint", 0.35),
                ("right_shoulder_roll_joint", -0.16),
                ("right_shoulder_pitch_joint", 0.35),
                ("left_one_joint", 1.0),
                ("right_one_joint", -1.0),
                ("left_two_joint", 0.52),
                ("right_two_joint", -0.52),
            ]),
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: HashMap::from([
            (
                "legs".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: g1_torso_leg_joint_exprs(),
                    effort_limit: Some(300.0),
                    velocity_limit: Some(100.0),
                    stiffness: g1_torso_leg_stiffness(),
                    damping: Gain::Uniform(5.0),
                    armature: Gain::PerJoint(joint_map(&[
                        (".*_hip_.*", 0.01),
                        (".*_knee_joint", 0.01),
                        ("torso_joint", 0.01),
                    ])),
                },
            ),
            (
                "feet".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: vec![
                        ".*_ankle_pitch_joint".to_string(),
                        ".*_ankle_roll_joint".to_string(),
                    ],
                    effort_limit: Some(20.0),
                    velocity_limit: None,
                    stiffness: Gain::Uniform(20.0),
                    damping: Gain::Uniform(2.0),
                    armature: Gain::Uniform(0.01),
                },
            ),
            (
                "arms".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: g1_arm_joint_exprs(),
                    effort_limit: Some(300.0),
                    velocity_limit: Some(100.0),
                    stiffness: Gain::Uniform(40.0),
                    damping: Gain::Uniform(10.0),
                    armature: Gain::PerJoint({
                        let mut map = joint_map(&[(".*_shoulder_.*", 0.01), (".*_elbow_.*", 0.01)]);
                        for expr in g1_hand_joint_exprs() {
                            map.insert(expr, 0.001);
                        }
                        map
                    }),
                },
            ),
        ]),
    }
}

/// Unitree G1 trained variant — deeper crouch, heavier armature.
pub fn unitree_g1_t() -> ArticulationConfig {
    ArticulationConfig {
        spawn: spawn(
            "Robots/Unitree/G1/g1_t.usd",
            default_rigid_props(),
            ArticulationRootProps {
                enabled_self_collisions: false,
                solver_position_iteration_count: 4,
                solver_velocity_iteration_count: 4,
            },
        ),
        init_state: InitialState {
            pos: [0.0, 0.0, 0.80],
            joint_pos: joint_map(&[
                (".*_hip_pitch_joint", -0.28),
                (".*_knee_joint", 0.63),
                (".*_ankle_pitch_joint", -0.35),
                (".*_elbow_pitch_joint", 0.87),
                ("left_shoulder_roll_joint", 0.16),
                ("left_shoulder_pitch_joint", 0.35),
                ("right_shoulder_roll_joint", -0.16),
                ("right_shoulder_pitch_joint", 0.35),
                ("left_one_joint", 1.0),
                ("right_one_joint", -1.0),
            ]),
            joint_vel: zero_joint_vel(),
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: HashMap::from([
            (
                "legs".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: g1_torso_leg_joint_exprs(),
                    effort_limit: Some(300.0),
                    velocity_limit: Some(100.0),
                    stiffness: g1_torso_leg_stiffness(),
                    damping: Gain::Uniform(5.0),
                    armature: Gain::Uniform(0.1),
                },
            ),
            (
                "feet".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: vec![
                        ".*_ankle_pitch_joint".to_string(),
                        ".*_ankle_roll_joint".to_string(),
                    ],
                    effort_limit: None,
                    velocity_limit: None,
                    stiffness: Gain::Uniform(20.0),
                    damping: Gain::Uniform(4.0),
                    armature: Gain::Uniform(0.1),
                },
            ),
            (
                "arms".to_string(),
                ActuatorConfig::Implicit {
                    joint_names_expr: g1_arm_joint_exprs(),
                    effort_limit: Some(300.0),
                    velocity_limit: Some(100.0),
                    stiffness: Gain::Uniform(40.0),
                    damping: Gain::Uniform(10.0),
                    armature: Gain::Uniform(0.1),
                },
            ),
        ]),
    }
}

/// All catalog robots keyed by name.
pub fn robot_catalog() -> HashMap<String, ArticulationConfig> {
    HashMap::from([
        ("unitree_a1".to_string(), unitree_a1()),
        ("unitree_go2".to_string(), unitree_go2()),
        ("unitree_go2w".to_string(), unitree_go2w()),
        ("unitree_b2".to_string(), unitree_b2()),
        ("unitree_b2w".to_string(), unitree_b2w()),
        ("unitree_g1".to_string(), unitree_g1()),
        ("unitree_g1_hands".to_string(), unitree_g1_hands()),
        ("unitree_g1_t".to_string(), unitree_g1_t()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete() {
        let catalog = robot_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.contains_key("unitree_a1"));
        assert!(catalog.contains_key("unitree_g1_t"));
    }

    #[test]
    fn a1_uses_dc_motor_legs() {
        let a1 = unitree_a1();
        match &a1.actuators["legs"] {
            ActuatorConfig::DcMotor {
                effort_limit,
                velocity_limit,
                stiffness,
                ..
            } => {
                assert_eq!(*effort_limit, 33.5);
                assert_eq!(*velocity_limit, 21.0);
                assert_eq!(*stiffness, 20.0);
            }
            _ => panic!("A1 legs must use the DC motor model"),
        }
        assert_eq!(a1.init_state.pos[2], 0.38);
    }

    #[test]
    fn b2_calf_is_stronger_and_slower() {
        let b2 = unitree_b2();
        match (&b2.actuators["hip"], &b2.actuators["calf"]) {
            (
                ActuatorConfig::DcMotor {
                    effort_limit: hip_effort,
                    velocity_limit: hip_vel,
                    ..
                },
                ActuatorConfig::DcMotor {
                    effort_limit: calf_effort,
                    velocity_limit: calf_vel,
                    ..
                },
            ) => {
                assert_eq!(*hip_effort, 200.0);
                assert_eq!(*calf_effort, 320.0);
                assert!(calf_vel < hip_vel);
            }
            _ => panic!("B2 actuators must use the DC motor model"),
        }
    }

    #[test]
    fn wheeled_variants_zero_wheel_stiffness() {
        for (cfg, group) in [(unitree_go2w(), "wheels"), (unitree_b2w(), "wheel")] {
            match &cfg.actuators[group] {
                ActuatorConfig::DcMotor { stiffness, .. } => assert_eq!(*stiffness, 0.0),
                _ => panic!("wheel group must use the DC motor model"),
            }
        }
    }

    #[test]
    fn g1_leg_stiffness_per_joint() {
        let g1 = unitree_g1();
        match &g1.actuators["legs"] {
            ActuatorConfig::Implicit { stiffness, .. } => match stiffness {
                Gain::PerJoint(map) => {
                    assert_eq!(map[".*_hip_yaw_joint"], 150.0);
                    assert_eq!(map[".*_knee_joint"], 200.0);
                    assert_eq!(map["waist_pitch_joint"], 200.0);
                }
                Gain::Uniform(_) => panic!("G1 leg stiffness is per joint"),
            },
            _ => panic!("G1 legs must use the implicit model"),
        }
        // Velocity clamps are specific to the 29-DOF G1.
        assert_eq!(g1.spawn.rigid.max_linear_velocity, 3.0);
        assert_eq!(g1.spawn.rigid.max_angular_velocity, 3.0);
    }

    #[test]
    fn g1_t_feet_have_no_effort_limit() {
        let g1_t = unitree_g1_t();
        match &g1_t.actuators["feet"] {
            ActuatorConfig::Implicit {
                effort_limit,
                damping,
                ..
            } => {
                assert!(effort_limit.is_none());
                assert!(matches!(damping, Gain::Uniform(v) if *v == 4.0));
            }
            _ => panic!("G1 feet must use the implicit model"),
        }
        assert_eq!(g1_t.init_state.joint_pos[".*_knee_joint"], 0.63);
    }

    #[test]
    fn configs_round_trip_through_json() {
        for (name, cfg) in robot_catalog() {
            let json = serde_json::to_string(&cfg).unwrap();
            let back: ArticulationConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(
                back.actuators.len(),
                cfg.actuators.len(),
                "actuator groups lost for {}",
                name
            );
            assert_eq!(back.spawn.usd_path, cfg.spawn.usd_path);
        }
    }
}
