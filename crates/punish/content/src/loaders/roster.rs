//! Fighter roster loader.

use std::path::{Path, PathBuf};

use punish_core::Fighter;

use crate::loaders::{LoadResult, read_file};

/// Loader for fighter frame data from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a single RON file.
    ///
    /// RON format: `Vec<Fighter>`
    pub fn load(path: &Path) -> LoadResult<Vec<Fighter>> {
        let content = read_file(path)?;
        let fighters: Vec<Fighter> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse roster RON at {}: {}", path.display(), e)
        })?;

        tracing::debug!(path = %path.display(), fighters = fighters.len(), "loaded roster");
        Ok(fighters)
    }

    /// Load one fighter per `*.ron` file in `dir`, ordered by file name.
    ///
    /// Expected directory structure:
    /// ```text
    /// fighters/
    ///   ├── link.ron
    ///   ├── mario.ron
    ///   └── pikachu.ron
    /// ```
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<Fighter>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut fighters = Vec::with_capacity(paths.len());
        for path in paths {
            let content = read_file(&path)?;
            let fighter: Fighter = ron::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Failed to parse fighter RON at {}: {}", path.display(), e)
            })?;
            fighters.push(fighter);
        }

        tracing::debug!(dir = %dir.display(), fighters = fighters.len(), "loaded fighter directory");
        Ok(fighters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use punish_core::{Damage, MoveCategory, MoveRange};

    const MARIO: &str = r#"(
        id: "mario",
        name: "mario",
        display_name: "Mario",
        series: "Super Mario",
        moves: [
            (
                id: "usmash",
                name: "upsmash",
                display_name: "Up Smash",
                category: smash,
                type: "smash",
                startup: 9,
                active: 4,
                recovery: 29,
                total_frames: 42,
                damage: 14.0,
                range: close,
                properties: (is_kill_move: true, kill_percent: Some(120.0)),
            ),
            (
                id: "upb",
                name: "upb",
                display_name: "Super Jump Punch",
                category: special,
                startup: 3,
                active: 3,
                recovery: 40,
                total_frames: 46,
                damage: [5.0, 0.6, 0.6],
                range: close,
            ),
        ],
        shield_data: (
            shield_health: 50.0,
            shield_regen: 0.07,
            shield_release_frames: 11,
            out_of_shield_options: ["upb", "usmash"],
        ),
        movement_data: (jump_squat: 3),
    )"#;

    const LUIGI: &str = r#"(
        id: "luigi",
        name: "luigi",
        display_name: "Luigi",
        locomotion: Some((
            weight: 97.0,
            walk_speed: 1.1,
            run_speed: 1.65,
            air_speed: 0.77,
            fall_speed: 1.32,
            fast_fall_speed: 2.11,
            gravity: 0.069,
        )),
        moves: [],
        shield_data: (shield_health: 50.0, shield_regen: 0.07, shield_release_frames: 11),
        movement_data: (jump_squat: 3),
    )"#;

    const NO_MOVEMENT_DATA: &str = r#"(
        id: "ghost",
        name: "ghost",
        display_name: "Ghost",
        moves: [],
        shield_data: (shield_health: 50.0, shield_regen: 0.07, shield_release_frames: 11),
    )"#;

    const NO_SHIELD_DATA: &str = r#"(
        id: "ghost",
        name: "ghost",
        display_name: "Ghost",
        moves: [],
        movement_data: (jump_squat: 3),
    )"#;

    #[test]
    fn loads_roster_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.ron");
        std::fs::write(&path, format!("[{MARIO}, {LUIGI}]")).unwrap();

        let roster = RosterLoader::load(&path).unwrap();
        assert_eq!(roster.len(), 2);

        let mario = &roster[0];
        let usmash = mario.find_move("usmash").unwrap();
        assert_eq!(usmash.category, MoveCategory::Smash);
        assert_eq!(usmash.range, MoveRange::Close);
        assert_eq!(usmash.properties.kill_percent, Some(120.0));
        assert!(usmash.is_up_smash());

        let upb = mario.find_move("upb").unwrap();
        assert_eq!(upb.damage, Damage::MultiHit(vec![5.0, 0.6, 0.6]));
        assert_eq!(mario.shield_data.out_of_shield_options.len(), 2);

        assert!(mario.locomotion.is_none());

        let luigi = &roster[1];
        assert_eq!(luigi.movement_data.jump_squat, 3);
        assert_eq!(luigi.locomotion.as_ref().map(|l| l.weight), Some(97.0));
    }

    #[test]
    fn rejects_fighter_without_frame_timings() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("no_movement.ron");
        std::fs::write(&path, format!("[{MARIO}, {NO_MOVEMENT_DATA}]")).unwrap();
        let err = RosterLoader::load(&path).unwrap_err().to_string();
        assert!(err.contains("no_movement.ron"));
        assert!(err.contains("movement_data"));

        let path = dir.path().join("no_shield.ron");
        std::fs::write(&path, format!("[{NO_SHIELD_DATA}]")).unwrap();
        let err = RosterLoader::load(&path).unwrap_err().to_string();
        assert!(err.contains("shield_data"));
    }

    #[test]
    fn directory_load_fails_on_incomplete_fighter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a_mario.ron"), MARIO).unwrap();
        std::fs::write(dir.path().join("b_ghost.ron"), NO_MOVEMENT_DATA).unwrap();

        let err = RosterLoader::load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("b_ghost.ron"));
    }

    #[test]
    fn loads_directory_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b_mario.ron"), MARIO).unwrap();
        std::fs::write(dir.path().join("a_luigi.ron"), LUIGI).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let fighters = RosterLoader::load_dir(dir.path()).unwrap();
        let ids: Vec<_> = fighters.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["luigi", "mario"]);
    }

    #[test]
    fn reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "[(id: \"x\", moves: [(startup: \"fast\")])]").unwrap();

        let err = RosterLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("broken.ron"));
    }
}
