//! Test cases for the DEF cell index parser
//!
//! Tests cover:
//! - Header capture (DESIGN, DIEAREA, UNITS)
//! - Logic and filler component lines
//! - Duplicate instance names
//! - Fatal record and header errors

use def_cell_index::def::parser::parse_def;
use def_cell_index::{CellKind, ParseError, DIE_INFO_LABEL};

#[test]
fn test_basic_def_parsing() {
    let def_content = r#"
VERSION 5.8 ;
DIVIDERCHAR "/" ;
BUSBITCHARS "[]" ;
DESIGN topmodule ;
UNITS DISTANCE MICRONS 1000 ;

DIEAREA ( 0 0 ) ( 1000 2000 ) ;

COMPONENTS 2 ;
- u1 INVX1 + PLACED ( 10000 20000 ) N
- FILLER_0_1 FILL1 + SOURCE DIST + PLACED ( 30000 20000 ) FS
END COMPONENTS

END DESIGN
"#;

    let def = parse_def(def_content).unwrap();
    assert_eq!(def.cells.len(), 2);

    let (label, die) = def.die_entry().unwrap();
    assert_eq!(label, DIE_INFO_LABEL);
    assert_eq!(die.design, "topmodule");
    assert_eq!(die.die_x, 1000.0);
    assert_eq!(die.die_y, 2000.0);
    assert_eq!(die.design_units, 1000.0);

    let inv = def.cell("u1").unwrap();
    assert_eq!(inv.cell_type, "INVX1");
    assert_eq!(inv.x, 10000.0);
    assert_eq!(inv.y, 20000.0);
    assert_eq!(inv.orient, "N");
    assert_eq!(inv.kind, CellKind::Logic);

    let filler = def.cell("FILLER_0_1").unwrap();
    assert_eq!(filler.cell_type, "FILL1");
    assert_eq!(filler.x, 30000.0);
    assert_eq!(filler.y, 20000.0);
    assert_eq!(filler.orient, "FS");
    assert_eq!(filler.kind, CellKind::Misc);
}

#[test]
fn test_second_design_line_ignored() {
    let def = parse_def("DESIGN topmodule ;\nVERSION 5.8 ;\nDESIGN other ;\n").unwrap();
    assert_eq!(def.die_info.unwrap().design, "topmodule");
}

#[test]
fn test_units_scale() {
    let def = parse_def("UNITS DISTANCE MICRONS 1000 ;").unwrap();
    assert_eq!(def.die_info.unwrap().design_units, 1000.0);
}

#[test]
fn test_duplicate_instance_last_wins() {
    let def_content = "\
COMPONENTS 2 ;
- u1 INVX1 + PLACED ( 100 200 ) N
- u1 BUFX2 + PLACED ( 300 400 ) S
END COMPONENTS
";
    let def = parse_def(def_content).unwrap();
    assert_eq!(def.cells.len(), 1);
    let cell = def.cell("u1").unwrap();
    assert_eq!(cell.cell_type, "BUFX2");
    assert_eq!(cell.x, 300.0);
    assert_eq!(cell.orient, "S");
}

#[test]
fn test_malformed_record_aborts_parse() {
    let def_content = "\
COMPONENTS 2 ;
- u1 INVX1 + PLACED ( 100 200 ) N
- u2 INVX1 + PLACED ( 100 200 ) N ;
END COMPONENTS
";
    let err = parse_def(def_content).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedRecord { line: 3, found: 11 }
    ));
}

#[test]
fn test_non_numeric_coordinate_aborts_parse() {
    let def_content = "\
COMPONENTS 1 ;
- u1 INVX1 + PLACED ( x200 200 ) N
END COMPONENTS
";
    let err = parse_def(def_content).unwrap_err();
    match err {
        ParseError::InvalidNumber { line, field, text } => {
            assert_eq!(line, 2);
            assert_eq!(field, "x");
            assert_eq!(text, "x200");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_short_diearea_is_malformed_header() {
    let err = parse_def("DIEAREA ( 0 0 ) ;").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedHeader {
            line: 1,
            keyword: "DIEAREA",
            needed: 7,
            found: 6
        }
    ));
}

#[test]
fn test_short_units_is_malformed_header() {
    let err = parse_def("UNITS DISTANCE MICRONS").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedHeader {
            keyword: "UNITS",
            needed: 4,
            found: 3,
            ..
        }
    ));
}

#[test]
fn test_blank_lines_inside_components() {
    let def_content = "\
COMPONENTS 1 ;

   \t
- u1 INVX1 + PLACED ( 100 200 ) N
END COMPONENTS
";
    let def = parse_def(def_content).unwrap();
    assert_eq!(def.cells.len(), 1);
}

#[test]
fn test_parses_are_independent() {
    let first = parse_def("DESIGN first ;\nUNITS DISTANCE MICRONS 2000 ;\n").unwrap();
    let second = parse_def("DESIGN second ;\n").unwrap();

    assert_eq!(first.die_info.as_ref().unwrap().design, "first");
    let die = second.die_info.unwrap();
    assert_eq!(die.design, "second");
    assert_eq!(die.design_units, 0.0);
}

#[test]
fn test_cells_by_kind() {
    let def_content = "\
COMPONENTS 3 ;
- u1 INVX1 + PLACED ( 100 200 ) N
- TAP_1 TAPCELL + SOURCE DIST + FIXED ( 0 0 ) N
- ENDCAP_1 ENDCAP + SOURCE DIST + FIXED ( 0 2720 ) FS
END COMPONENTS
";
    let def = parse_def(def_content).unwrap();
    assert_eq!(def.cells_of_kind(CellKind::Logic).count(), 1);
    assert_eq!(def.cells_of_kind(CellKind::Misc).count(), 2);
    assert_eq!(def.cell_types(), vec!["ENDCAP", "INVX1", "TAPCELL"]);
}

#[test]
fn test_units_inside_components_is_a_record() {
    let def_content = "\
COMPONENTS 1 ;
UNITS DISTANCE MICRONS 1000 ;
- u1 INVX1 + PLACED ( 100 200 ) N
END COMPONENTS
";
    let err = parse_def(def_content).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedRecord { line: 2, found: 5 }
    ));
}

#[test]
fn test_design_inside_components_is_a_record() {
    let err = parse_def("COMPONENTS 1 ;\nDESIGN top ;\nEND COMPONENTS\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedRecord { line: 2, found: 3 }
    ));
}

#[test]
fn test_non_numeric_die_size() {
    let err = parse_def("DIEAREA ( 0 0 ) ( abc 2000 ) ;").unwrap_err();
    match err {
        ParseError::InvalidNumber { line, field, text } => {
            assert_eq!(line, 1);
            assert_eq!(field, "die x");
            assert_eq!(text, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = parse_def("DIEAREA ( 0 0 ) ( 1000 2k ) ;").unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidNumber { field: "die y", .. }
    ));
}

#[test]
fn test_non_numeric_units() {
    let err = parse_def("DESIGN top ;\nUNITS DISTANCE MICRONS x ;").unwrap_err();
    match err {
        ParseError::InvalidNumber { line, field, text } => {
            assert_eq!(line, 2);
            assert_eq!(field, "units");
            assert_eq!(text, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}
