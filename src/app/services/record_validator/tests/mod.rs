//! Test utilities for record validator testing
//!
//! Builds FEC-shaped lines so individual tests only spell out the fields
//! they care about.

mod field_validator_tests;

/// Build a conforming 21-field FEC line
pub fn fec_line(recipient: &str, zip: &str, date: &str, amount: &str, other_id: &str) -> String {
    let mut fields = vec![""; 21];
    fields[0] = recipient;
    fields[1] = "N";
    fields[2] = "M3";
    fields[3] = "P";
    fields[4] = "201703039042410893";
    fields[5] = "15";
    fields[6] = "IND";
    fields[7] = "DOE, JANE";
    fields[8] = "SPRINGFIELD";
    fields[9] = "IL";
    fields[10] = zip;
    fields[11] = "ENGINEER";
    fields[12] = "ACME CORP";
    fields[13] = date;
    fields[14] = amount;
    fields[15] = other_id;
    fields[16] = "SA11AI_81445687";
    fields[17] = "1152124";
    fields[20] = "4031020171376808181";
    fields.join("|")
}
