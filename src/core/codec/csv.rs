//! CSV codec for the full program dataset
//!
//! Encodes the eight-semester dataset as delimited text and parses it back.
//! The format matches earlier releases of the tool: a fixed header, one row
//! per non-blank module record, name and code wrapped in double quotes.

use crate::core::models::{GradeEntry, ModuleRecord, Program};
use std::collections::BTreeMap;

/// Fixed header line for exported files.
pub const CSV_HEADER: &str = "Semester,Module Name,Module Code,Credit,Grade,Credit Point";

/// Encode the program as CSV text.
///
/// Blank placeholder rows are omitted; every record with at least one field
/// set is emitted in fixed semester order. Name and code are wrapped in
/// double quotes (embedded quotes are not escaped; a name containing a
/// quote will not survive the round trip). Credit uses the shortest decimal
/// form; credit point is fixed to two decimal places. Lines are joined with
/// `\n` and there is no trailing newline.
#[must_use]
pub fn encode(program: &Program) -> String {
    let mut rows = vec![CSV_HEADER.to_string()];

    for (number, modules) in program.iter() {
        let key = Program::semester_key(number);
        for record in modules {
            if record.is_blank() {
                continue;
            }
            rows.push(format!(
                "{key},\"{}\",\"{}\",{},{},{:.2}",
                record.module_name,
                record.module_code,
                record.credit(),
                record.grade(),
                record.credit_point()
            ));
        }
    }

    rows.join("\n")
}

/// Decode CSV text back into a program.
///
/// The first line is treated as the header and skipped. Rows with fewer
/// than six fields, or naming a semester outside the eight known slots, are
/// silently discarded; non-numeric credit fields coerce to 0 and
/// unrecognized grade symbols pass through as opaque strings. Semesters
/// with no surviving rows come back with a single blank placeholder, so the
/// result is always a well-formed program.
#[must_use]
pub fn decode(text: &str) -> Program {
    let mut map: BTreeMap<String, Vec<ModuleRecord>> = BTreeMap::new();

    for line in text.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = parse_csv_row(line);
        if fields.len() < 6 {
            continue;
        }

        let record = ModuleRecord::from_decoded(
            strip_quotes(&fields[1]).to_string(),
            strip_quotes(&fields[2]).to_string(),
            fields[3].parse::<f64>().unwrap_or(0.0),
            GradeEntry::from(fields[4].as_str()),
            fields[5].parse::<f64>().unwrap_or(0.0),
        );

        map.entry(fields[0].clone()).or_default().push(record);
    }

    // Unknown semester keys are dropped and empty slots backfilled here.
    Program::from(map)
}

/// Split a CSV row into fields, honoring double-quoted substrings.
///
/// Commas inside quotes do not split the field; the quote characters
/// themselves are kept so the caller can strip them per field.
fn parse_csv_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in row.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Strip surrounding double quotes, only when both ends are quoted.
fn strip_quotes(field: &str) -> &str {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        &field[1..field.len() - 1]
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Grade, SEMESTER_COUNT};

    fn module(name: &str, code: &str, credit: f64, grade: GradeEntry) -> ModuleRecord {
        ModuleRecord::new(name.to_string(), code.to_string(), credit, grade)
    }

    #[test]
    fn encodes_header_and_non_blank_rows() {
        let mut program = Program::new();
        program
            .add_module(1, module("Calculus I", "MATH1341", 4.0, Grade::AMinus.into()))
            .expect("add");

        let text = encode(&program);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 2, "blank placeholder rows are omitted");
        assert_eq!(lines[1], "semester-1,\"Calculus I\",\"MATH1341\",4,A-,14.80");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn encodes_fractional_credit_plainly() {
        let mut program = Program::new();
        program
            .add_module(2, module("Lab", "PHYS1152", 1.5, Grade::B.into()))
            .expect("add");

        let text = encode(&program);
        assert!(text.contains("semester-2,\"Lab\",\"PHYS1152\",1.5,B,4.50"));
    }

    #[test]
    fn encodes_partial_rows_with_empty_fields() {
        let mut program = Program::new();
        program
            .add_module(1, module("Pending", "", 0.0, GradeEntry::Unset))
            .expect("add");

        let text = encode(&program);
        assert!(text.contains("semester-1,\"Pending\",\"\",0,,0.00"));
    }

    #[test]
    fn decode_respects_quoted_commas() {
        let text = format!(
            "{CSV_HEADER}\nsemester-1,\"Algorithms, Advanced\",\"CS4800\",4,A,16.00"
        );

        let program = decode(&text);
        let semester = program.semester(1).unwrap();
        assert_eq!(semester.len(), 1);
        assert_eq!(semester[0].module_name, "Algorithms, Advanced");
        assert_eq!(semester[0].module_code, "CS4800");
    }

    #[test]
    fn decode_discards_short_rows() {
        let text = format!("{CSV_HEADER}\nsemester-1,\"Only\",\"Four\",4");

        let program = decode(&text);
        assert!(program.is_empty());
    }

    #[test]
    fn decode_drops_unknown_semester_keys() {
        let text = format!(
            "{CSV_HEADER}\nsemester-9,\"Ghost\",\"X1\",4,A,16.00\nsemester-3,\"Real\",\"CS3000\",4,A,16.00"
        );

        let program = decode(&text);
        assert_eq!(program.semester(3).unwrap()[0].module_code, "CS3000");

        // The unknown row is gone and no other slot picked it up.
        for number in [1, 2, 4, 5, 6, 7, 8] {
            assert!(program.semester(number).unwrap()[0].is_blank());
        }
    }

    #[test]
    fn decode_coerces_non_numeric_fields_to_zero() {
        let text = format!("{CSV_HEADER}\nsemester-1,\"Odd\",\"CS1\",four,A,junk");

        let program = decode(&text);
        let record = &program.semester(1).unwrap()[0];
        assert!((record.credit() - 0.0).abs() < f64::EPSILON);
        assert!((record.credit_point() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decode_passes_unrecognized_grades_through() {
        let text = format!("{CSV_HEADER}\nsemester-1,\"Odd\",\"CS1\",4,Z+,0.00");

        let program = decode(&text);
        let record = &program.semester(1).unwrap()[0];
        assert_eq!(record.grade(), &GradeEntry::Unknown("Z+".to_string()));
    }

    #[test]
    fn decode_backfills_every_empty_slot() {
        let program = decode(CSV_HEADER);

        for number in 1..=SEMESTER_COUNT {
            let semester = program.semester(number).unwrap();
            assert_eq!(semester.len(), 1);
            assert!(semester[0].is_blank());
        }
    }

    #[test]
    fn round_trip_preserves_non_blank_records() {
        let mut program = Program::new();
        program
            .add_module(1, module("Calculus I", "MATH1341", 4.0, Grade::A.into()))
            .expect("add");
        program
            .add_module(1, module("Physics Lab", "PHYS1152", 1.5, Grade::BPlus.into()))
            .expect("add");
        program
            .add_module(7, module("Capstone", "CS4500", 8.0, Grade::AMinus.into()))
            .expect("add");

        let decoded = decode(&encode(&program));

        for (number, row, name, code, credit, grade) in [
            (1usize, 0usize, "Calculus I", "MATH1341", 4.0, Grade::A),
            (1, 1, "Physics Lab", "PHYS1152", 1.5, Grade::BPlus),
            (7, 0, "Capstone", "CS4500", 8.0, Grade::AMinus),
        ] {
            let record = &decoded.semester(number).unwrap()[row];
            assert_eq!(record.module_name, name);
            assert_eq!(record.module_code, code);
            assert!((record.credit() - credit).abs() < f64::EPSILON);
            assert_eq!(record.grade(), &GradeEntry::Known(grade));

            // Credit point survives to two decimal places.
            let expected = (credit * grade.points() * 100.0).round() / 100.0;
            assert!((record.credit_point() - expected).abs() < 1e-9);
        }
    }
}
