//! Swarm-level coverage tests across planner, partition and environment.

use std::collections::{HashMap, HashSet};

use super::*;

/// Topologies exercised below: single agent, odd and even strips, and
/// square tilings of several sizes.
const TOPOLOGIES: [(usize, usize); 9] = [
    (5, 1),
    (8, 1),
    (2, 2),
    (6, 2),
    (8, 2),
    (6, 4),
    (8, 4),
    (8, 16),
    (12, 36),
];

/// Local cells visited by the reference planner during its first downward sweep.
fn down_sweep_cells(coordinator: &SwarmCoordinator) -> HashSet<Cell> {
    let mut planner = coordinator.build_reference_planner().unwrap();
    let mut visited = HashSet::from([planner.position()]);
    while planner.phase() == SweepPhase::SweepingDown {
        planner.next().unwrap();
        visited.insert(planner.position());
    }
    visited
}

#[test]
fn sub_grids_tile_the_grid_without_overlap() {
    for (grid, agents) in TOPOLOGIES {
        let coordinator = SwarmCoordinator::new(grid, agents).unwrap();
        let plan = coordinator.plan();
        let local = down_sweep_cells(&coordinator);
        assert_eq!(
            local.len(),
            plan.sub_grid_size() * plan.sub_grid_rows(),
            "{agents} agents on {grid}x{grid}"
        );

        let mut owner: HashMap<Cell, usize> = HashMap::new();
        for agent in 0..plan.agent_count() {
            for cell in &local {
                let world = plan.to_world(agent, *cell).unwrap();
                assert!(world.within(grid), "{world} outside {grid}x{grid}");
                if let Some(other) = owner.insert(world, agent) {
                    panic!("{world} swept by agents {other} and {agent}");
                }
            }
        }
        assert_eq!(owner.len(), grid * grid, "{agents} agents on {grid}x{grid}");
    }
}

#[test]
fn agents_track_the_translated_reference_position() {
    for (grid, agents) in [(8, 4), (8, 2), (6, 2), (8, 16)] {
        let coordinator = SwarmCoordinator::new(grid, agents).unwrap();
        let plan = coordinator.plan();
        let mut env = GridWorld::new(
            GridWorldConfig {
                grid_size: grid,
                n_agents: agents,
                target: TargetPlacement::Absent,
                timestep_limit: 1000,
            },
            0,
        );
        env.reset(plan.agent_origins()).unwrap();

        let mut planner = coordinator.build_reference_planner().unwrap();
        for _ in 0..300 {
            let code = planner.next().unwrap().code();
            let actions: ActionMap = plan.agent_ids().iter().map(|id| (id.clone(), code)).collect();
            let result = env.step(&actions).unwrap();
            for (i, id) in plan.agent_ids().iter().enumerate() {
                assert_eq!(
                    Some(result.observations[id]),
                    plan.to_world(i, planner.position()),
                    "{id} with {agents} agents on {grid}x{grid}"
                );
            }
        }
    }
}

#[test]
fn swarm_searches_every_cell_when_no_target_exists() {
    for (grid, agents) in [(8, 4), (8, 2), (6, 2), (6, 4), (8, 16), (5, 1)] {
        let coordinator = SwarmCoordinator::new(grid, agents).unwrap();
        let mut env = GridWorld::new(
            GridWorldConfig {
                grid_size: grid,
                n_agents: agents,
                target: TargetPlacement::Absent,
                timestep_limit: 300,
            },
            0,
        );
        let outcome = coordinator.run_episode(&mut env).unwrap();
        assert!(!outcome.found);
        assert_eq!(outcome.ticks, 300);
        assert_eq!(
            env.searched_cells().len(),
            grid * grid,
            "{agents} agents on {grid}x{grid}"
        );
    }
}

#[test]
fn swarm_finds_a_fixed_target() {
    let coordinator = SwarmCoordinator::new(8, 4).unwrap();
    let mut env = GridWorld::new(
        GridWorldConfig {
            target: TargetPlacement::Fixed(Cell::new(5, 6)),
            ..GridWorldConfig::default()
        },
        0,
    );
    assert!(coordinator.run(&mut env).unwrap());
    assert!(env.t < 100);
}

#[test]
fn mismatched_environment_surfaces_as_sweep_error() {
    let coordinator = SwarmCoordinator::new(8, 4).unwrap();
    let mut env = GridWorld::new(
        GridWorldConfig {
            n_agents: 2,
            ..GridWorldConfig::default()
        },
        0,
    );
    assert_eq!(
        coordinator.run(&mut env).unwrap_err(),
        SweepError::Environment(EnvironmentError::AgentCountMismatch {
            expected: 2,
            actual: 4
        })
    );
}
