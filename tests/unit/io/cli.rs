//! Tests for command-line parsing, palette edits and the generation runner

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use mosaic::MosaicError;
    use mosaic::io::cli::{Cli, PatternRunner};
    use mosaic::io::configuration::{DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT, DEFAULT_SEED};
    use mosaic::model::parameters::{Orientation, Parameters, StepDirection};
    use mosaic::model::region::Region;

    // Tests parsing without arguments reproduces the default record
    // Verified by changing the default offset argument
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["mosaic"]);

        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.rows, DEFAULT_ROW_COUNT);
        assert_eq!(cli.columns, DEFAULT_COLUMN_COUNT);
        assert!(cli.output.is_none());
        assert!(!cli.quiet);

        let parameters = cli.parameters().expect("default arguments are valid");
        assert_eq!(parameters, Parameters::default());
    }

    // Tests every layout argument reaches the parameter record
    // Verified by dropping the SetOffset action
    #[test]
    fn test_cli_parse_layout_args() {
        let cli = Cli::parse_from([
            "mosaic",
            "--seed",
            "Tessera",
            "--orientation",
            "vertical",
            "-r",
            "5",
            "-c",
            "12",
            "--offset",
            "3",
            "--step-direction",
            "left",
            "--step-alternate",
            "-t",
            "4",
            "-a",
            "-3",
        ]);
        let parameters = cli.parameters().expect("arguments are valid");

        assert_eq!(parameters.seed, "Tessera");
        assert_eq!(parameters.orientation, Orientation::Vertical);
        assert_eq!(parameters.row_count, 5);
        assert_eq!(parameters.column_count, 12);
        assert_eq!(parameters.offset, 3);
        assert_eq!(parameters.step_direction, StepDirection::Left);
        assert!(parameters.step_alternate);
        assert_eq!(parameters.rotation, 4);
        assert_eq!(parameters.aspect_ratio, -3);
    }

    // Tests repeated hole arguments are parsed and kept in order
    // Verified by keeping only the last --hole value
    #[test]
    fn test_cli_parse_holes() {
        let cli = Cli::parse_from(["mosaic", "--hole", "2,3:1,1", "--hole", "4,5"]);
        let parameters = cli.parameters().expect("arguments are valid");

        assert_eq!(
            parameters.holes,
            vec![Region::new(2, 3, 1, 1), Region::new(4, 5, 4, 5)]
        );
    }

    // Tests malformed hole and weight arguments are rejected by the parser
    // Verified by accepting a weight without a name
    #[test]
    fn test_cli_rejects_malformed_values() {
        assert!(Cli::try_parse_from(["mosaic", "--hole", "0,1"]).is_err());
        assert!(Cli::try_parse_from(["mosaic", "--weight", "Aqua"]).is_err());
        assert!(Cli::try_parse_from(["mosaic", "--weight", "Aqua=x"]).is_err());
    }

    // Tests palette edits enable, disable, favour and reweight colours
    // Verified by ignoring --favourite arguments
    #[test]
    fn test_cli_palette_edits() {
        let cli = Cli::parse_from([
            "mosaic",
            "--enable",
            "Plum",
            "--disable",
            "Coral",
            "--favourite",
            "Navy",
            "--weight",
            "Sand=9",
        ]);
        let parameters = cli.parameters().expect("arguments are valid");

        let colour = |name: &str| parameters.colour(name).expect("colour exists");
        assert!(colour("Plum").enabled);
        assert!(!colour("Coral").enabled);
        assert!(colour("Navy").favourite);
        assert_eq!(colour("Sand").weight, 9);
        assert_eq!(parameters.enabled_colours().count(), 6);
    }

    // Tests palette edits naming an unknown colour fail
    // Verified by appending unknown colours instead of failing
    #[test]
    fn test_cli_unknown_colour() {
        let cli = Cli::parse_from(["mosaic", "--enable", "Mauve"]);

        assert!(matches!(
            cli.parameters(),
            Err(MosaicError::InvalidParameter {
                parameter: "enable",
                ..
            })
        ));
    }

    // Tests the runner validates before generating
    // Verified by skipping validation in the runner
    #[test]
    fn test_runner_rejects_invalid_parameters() {
        let cli = Cli::parse_from(["mosaic", "--quiet", "--offset", "11"]);
        let result = PatternRunner::new(cli).run();

        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "offset",
                ..
            })
        ));
    }

    // Tests the runner rejects a non-positive magnification
    // Verified by removing the magnification check
    #[test]
    fn test_runner_rejects_zero_magnification() {
        let cli = Cli::parse_from(["mosaic", "--quiet", "-m", "0"]);

        assert!(PatternRunner::new(cli).run().is_err());
    }

    // Tests infinite or NaN export scales are rejected before rendering
    // Verified by checking only the sign of the scales
    #[test]
    fn test_runner_rejects_non_finite_scales() {
        for (flag, value) in [("-m", "inf"), ("-b", "inf"), ("-m", "NaN")] {
            let cli = Cli::parse_from(["mosaic", "--quiet", flag, value]);

            assert!(
                matches!(
                    PatternRunner::new(cli).run(),
                    Err(MosaicError::InvalidParameter { .. })
                ),
                "{flag} {value}"
            );
        }
    }

    // Tests hole help text states where row numbering starts
    // Verified by dropping the row convention from the help text
    #[test]
    fn test_hole_help_names_bottom_row() {
        let help = Cli::command().render_long_help().to_string();

        assert!(help.contains("row 1 is the bottom row"), "{help}");
    }

    // Tests the runner writes a PNG when an output path is given
    // Verified by skipping export in the runner
    #[test]
    fn test_runner_exports_png() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let output = dir.path().join("nested").join("pattern.png");
        let output_arg = output.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "mosaic",
            "--quiet",
            "-r",
            "3",
            "-c",
            "5",
            "-m",
            "50",
            "--hole",
            "1,1",
            "-o",
            output_arg.as_str(),
        ]);
        let result = PatternRunner::new(cli).run();

        assert!(result.is_ok(), "{result:?}");
        assert!(output.exists());
    }
}
