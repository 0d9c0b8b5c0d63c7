//! Tests for command-line parsing, map summaries and command execution

#[cfg(test)]
mod tests {
    use citygrid::io::cli::{Cli, Command, CommandRunner, MapSummary};
    use citygrid::io::configuration::{
        DEFAULT_MAP_SIZE, DEFAULT_MINIMAP_SCALE, DEFAULT_SEED, DEFAULT_WATER_DENSITY,
    };
    use citygrid::io::file::{load_tilemap, save_tilemap};
    use citygrid::{MapError, TerrainFlag, Tilemap};
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let Ok(cli) = Cli::try_parse_from(args) else {
            unreachable!("Arguments {args:?} should parse");
        };
        cli
    }

    // Tests generate falls back to the configured defaults
    // Verified by changing default_value_t on the size argument
    #[test]
    fn test_parse_generate_defaults() {
        let cli = parse(&["citygrid", "generate", "out.map"]);

        assert!(!cli.verbose);
        match cli.command {
            Command::Generate {
                output,
                size,
                seed,
                water,
                ..
            } => {
                assert_eq!(output, PathBuf::from("out.map"));
                assert_eq!(size, DEFAULT_MAP_SIZE);
                assert_eq!(seed, DEFAULT_SEED);
                assert!((water - DEFAULT_WATER_DENSITY).abs() < f64::EPSILON);
            }
            _ => unreachable!("Expected generate command"),
        }
    }

    // Tests all generate options and the global verbose flag
    #[test]
    fn test_parse_generate_all_args() {
        let cli = parse(&[
            "citygrid", "generate", "out.map", "-n", "16", "--seed", "9", "--water", "0.3",
            "--rock", "0.1", "--tree", "0.2", "--verbose",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Command::Generate {
                size,
                seed,
                rock,
                tree,
                ..
            } => {
                assert_eq!(size, 16);
                assert_eq!(seed, 9);
                assert!((rock - 0.1).abs() < f64::EPSILON);
                assert!((tree - 0.2).abs() < f64::EPSILON);
            }
            _ => unreachable!("Expected generate command"),
        }
    }

    #[test]
    fn test_parse_minimap_defaults() {
        let cli = parse(&["citygrid", "-v", "minimap", "city.map"]);

        assert!(cli.verbose);
        match cli.command {
            Command::Minimap { map, output, scale } => {
                assert_eq!(map, PathBuf::from("city.map"));
                assert_eq!(output, None);
                assert_eq!(scale, DEFAULT_MINIMAP_SCALE);
            }
            _ => unreachable!("Expected minimap command"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["citygrid"]).is_err());
        assert!(Cli::try_parse_from(["citygrid", "inspect"]).is_err());
    }

    // Tests the default minimap lands next to the map file
    // Verified by dropping the parent directory from the path
    #[test]
    fn test_get_minimap_path() {
        assert_eq!(
            CommandRunner::get_minimap_path(Path::new("maps/city.map")),
            PathBuf::from("maps/city_minimap.png")
        );
        assert_eq!(
            CommandRunner::get_minimap_path(Path::new("city")),
            PathBuf::from("city_minimap.png")
        );
    }

    // Tests summaries count each flag and render one line per entry
    #[test]
    fn test_map_summary() {
        let mut map = Tilemap::with_size(3).unwrap_or_default();
        for tile in map.get_filled_rectangle_mut(0, 0, 0, 1) {
            tile.terrain_mut().set_water(true);
        }
        if let Some(tile) = map.get_mut(2, 2) {
            tile.terrain_mut().set_tree(true);
        }

        let summary = MapSummary::from_tilemap(&map);
        assert_eq!(summary.size, 3);
        assert_eq!(summary.constructible, 6);
        assert_eq!(summary.flags.first(), Some(&(TerrainFlag::Water, 2)));

        assert_eq!(
            summary.render(),
            "size: 3x3\nconstructible: 6\nwater: 2\nrock: 0\ntree: 1\nbuilding: 0\nroad: 0"
        );
    }

    // Tests generate writes a loadable map of the requested size
    // Verified by skipping save_tilemap in the runner
    #[test]
    fn test_run_generate_then_minimap() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("Temp dir should be creatable");
        };
        let map_path = dir.path().join("city.map");
        let map_arg = map_path.to_string_lossy().into_owned();

        let generate = parse(&[
            "citygrid",
            "generate",
            map_arg.as_str(),
            "-n",
            "5",
            "--seed",
            "3",
        ]);
        assert!(CommandRunner::new(generate).run().is_ok());
        assert_eq!(load_tilemap(&map_path).map(|map| map.size()).ok(), Some(5));

        let minimap = parse(&["citygrid", "minimap", map_arg.as_str(), "--scale", "2"]);
        assert!(CommandRunner::new(minimap).run().is_ok());
        assert_eq!(
            ::image::image_dimensions(dir.path().join("city_minimap.png")).ok(),
            Some((10, 10))
        );
    }

    #[test]
    fn test_run_inspect_reads_saved_map() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("Temp dir should be creatable");
        };
        let map_path = dir.path().join("inspect.map");
        let map = Tilemap::with_size(2).unwrap_or_default();
        assert!(save_tilemap(&map_path, &map).is_ok());

        let map_arg = map_path.to_string_lossy().into_owned();

        let inspect = parse(&["citygrid", "inspect", map_arg.as_str()]);
        assert!(CommandRunner::new(inspect).run().is_ok());
    }

    // Tests invalid densities surface as parameter errors
    #[test]
    fn test_run_generate_rejects_bad_density() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("Temp dir should be creatable");
        };
        let map_path = dir.path().join("bad.map");
        let map_arg = map_path.to_string_lossy().into_owned();
        let generate = parse(&[
            "citygrid",
            "generate",
            map_arg.as_str(),
            "--water",
            "1.5",
        ]);

        assert!(matches!(
            CommandRunner::new(generate).run(),
            Err(MapError::InvalidParameter { parameter: "water", .. })
        ));
        assert!(!map_path.exists());
    }
}
