//! Tests for copy-on-write parameter actions

#[cfg(test)]
mod tests {
    use mosaic::model::action::Action;
    use mosaic::model::colour::ColourSpec;
    use mosaic::model::parameters::{Orientation, Parameters};
    use mosaic::model::region::Region;

    // Tests applying an action leaves the original record untouched
    // Verified by mutating through a shared reference
    #[test]
    fn test_apply_is_copy_on_write() {
        let original = Parameters::default();

        let next = original.apply(Action::SetSeed("Tessera".to_string()));

        assert_eq!(original.seed, "Oceani");
        assert_eq!(next.seed, "Tessera");
        assert_eq!(
            next.apply(Action::SetSeed("Oceani".to_string())),
            original
        );
    }

    // Tests scalar setters replace only their field
    // Verified by making SetOffset also reset the rotation
    #[test]
    fn test_scalar_setters() {
        let parameters = Parameters::default()
            .apply(Action::SetOrientation(Orientation::Vertical))
            .apply(Action::SetRowCount(12))
            .apply(Action::SetOffset(4))
            .apply(Action::SetRotation(3))
            .apply(Action::SetGrout("#000".to_string()));

        assert_eq!(parameters.orientation, Orientation::Vertical);
        assert_eq!(parameters.row_count, 12);
        assert_eq!(parameters.offset, 4);
        assert_eq!(parameters.rotation, 3);
        assert_eq!(parameters.grout, "#000");
        assert_eq!(parameters.column_count, 34);
    }

    // Tests shrinking the column count wraps the rotation into range
    // Verified by keeping the rotation unchanged
    #[test]
    fn test_set_column_count_wraps_rotation() {
        let parameters = Parameters::default()
            .apply(Action::SetRotation(25))
            .apply(Action::SetColumnCount(10));

        assert_eq!(parameters.rotation, 5);
        assert!(parameters.validate().is_ok());

        let zero = parameters.apply(Action::SetColumnCount(0));
        assert_eq!(zero.rotation, 0);
    }

    // Tests SetColour replaces by name or appends
    // Verified by always appending
    #[test]
    fn test_set_colour() {
        let base = Parameters::default();

        let replaced = base.apply(Action::SetColour(ColourSpec::new(
            "Coral", "#ff0000", 'C', false, 2, false,
        )));
        assert_eq!(replaced.colour_model.len(), base.colour_model.len());
        assert_eq!(
            replaced.colour("Coral").map(|c| c.hexcode.as_str()),
            Some("#ff0000")
        );

        let appended = base.apply(Action::SetColour(ColourSpec::new(
            "Mauve", "#e0b0ff", 'M', true, 4, false,
        )));
        assert_eq!(appended.colour_model.len(), base.colour_model.len() + 1);
    }

    // Tests hole actions add in order and remove by index
    // Verified by removing from the end regardless of index
    #[test]
    fn test_hole_actions() {
        let parameters = Parameters::default()
            .apply(Action::AddHole(Region::new(1, 1, 2, 2)))
            .apply(Action::AddHole(Region::new(3, 3, 3, 3)))
            .apply(Action::AddHole(Region::new(5, 1, 5, 4)));

        let removed = parameters.apply(Action::RemoveHole(1));
        assert_eq!(
            removed.holes,
            vec![Region::new(1, 1, 2, 2), Region::new(5, 1, 5, 4)]
        );

        let unchanged = parameters.apply(Action::RemoveHole(3));
        assert_eq!(unchanged, parameters);
    }

    // Tests Load replaces the whole record
    // Verified by merging the snapshot into the current record
    #[test]
    fn test_load_snapshot() {
        let snapshot = Parameters {
            seed: "Tessera".to_string(),
            row_count: 2,
            ..Parameters::default()
        };

        let loaded = Parameters::default()
            .apply(Action::AddHole(Region::new(1, 1, 1, 1)))
            .apply(Action::Load(Box::new(snapshot.clone())));

        assert_eq!(loaded, snapshot);
    }
}
