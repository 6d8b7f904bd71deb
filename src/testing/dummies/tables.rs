use crate::core::DataTable;
use crate::core::attributes::{NominalAttribute, NumericAttribute};

const TENNIS_ROWS: [([&str; 4], &str); 14] = [
    (["Sunny", "Hot", "High", "Weak"], "No"),
    (["Sunny", "Hot", "High", "Strong"], "No"),
    (["Overcast", "Hot", "High", "Weak"], "Yes"),
    (["Rain", "Mild", "High", "Weak"], "Yes"),
    (["Rain", "Cool", "Normal", "Weak"], "Yes"),
    (["Rain", "Cool", "Normal", "Strong"], "No"),
    (["Overcast", "Cool", "Normal", "Strong"], "Yes"),
    (["Sunny", "Mild", "High", "Weak"], "No"),
    (["Sunny", "Cool", "Normal", "Weak"], "Yes"),
    (["Rain", "Mild", "Normal", "Weak"], "Yes"),
    (["Sunny", "Mild", "Normal", "Strong"], "Yes"),
    (["Overcast", "Mild", "High", "Strong"], "Yes"),
    (["Overcast", "Hot", "Normal", "Weak"], "Yes"),
    (["Rain", "Mild", "High", "Strong"], "No"),
];

const BUYS_COMPUTER_ROWS: [([&str; 4], &str); 14] = [
    (["<=30", "High", "No", "Fair"], "No"),
    (["<=30", "High", "No", "Excellent"], "No"),
    (["30-40", "High", "No", "Fair"], "Yes"),
    ([">40", "Medium", "No", "Fair"], "Yes"),
    ([">40", "Low", "Yes", "Fair"], "Yes"),
    ([">40", "Low", "Yes", "Excellent"], "No"),
    (["30-40", "Low", "Yes", "Excellent"], "Yes"),
    (["<=30", "Medium", "No", "Fair"], "No"),
    (["<=30", "Low", "Yes", "Fair"], "Yes"),
    ([">40", "Medium", "Yes", "Fair"], "Yes"),
    (["<=30", "Medium", "Yes", "Excellent"], "Yes"),
    (["30-40", "Medium", "No", "Excellent"], "Yes"),
    (["30-40", "High", "Yes", "Fair"], "Yes"),
    ([">40", "Medium", "No", "Excellent"], "No"),
];

const STUDENT_ROWS: [([&str; 3], &str); 10] = [
    (["1", "60", "65"], "No"),
    (["2", "70", "70"], "No"),
    (["3", "80", "75"], "Yes"),
    (["4", "85", "80"], "Yes"),
    (["5", "90", "82"], "Yes"),
    (["6", "95", "85"], "Yes"),
    (["7", "85", "88"], "Yes"),
    (["8", "90", "90"], "Yes"),
    (["9", "95", "92"], "Yes"),
    (["10", "100", "95"], "Yes"),
];

fn fill<const N: usize>(mut table: DataTable, rows: &[([&str; N], &str)]) -> DataTable {
    for (values, label) in rows {
        table
            .push_row(values, label)
            .expect("fixture rows match the declared attributes");
    }
    table
}

/// The 14-day "play tennis" table: 9 yes, 5 no.
pub fn tennis_table() -> DataTable {
    let table = DataTable::new(
        vec![
            NominalAttribute::new("Outlook", ["Sunny", "Overcast", "Rain"]).into(),
            NominalAttribute::new("Temperature", ["Hot", "Mild", "Cool"]).into(),
            NominalAttribute::new("Humidity", ["High", "Normal"]).into(),
            NominalAttribute::new("Wind", ["Weak", "Strong"]).into(),
        ],
        NominalAttribute::new("Play", ["Yes", "No"]),
    );
    fill(table, &TENNIS_ROWS)
}

/// The 14-customer "buys computer" table: 9 yes, 5 no.
pub fn buys_computer_table() -> DataTable {
    let table = DataTable::new(
        vec![
            NominalAttribute::new("Age", ["<=30", "30-40", ">40"]).into(),
            NominalAttribute::new("Income", ["High", "Medium", "Low"]).into(),
            NominalAttribute::new("Student", ["Yes", "No"]).into(),
            NominalAttribute::new("Credit", ["Fair", "Excellent"]).into(),
        ],
        NominalAttribute::new("BuysComputer", ["Yes", "No"]),
    );
    fill(table, &BUYS_COMPUTER_ROWS)
}

/// Ten students with numeric study hours, attendance and previous grade: 8 pass, 2 fail.
pub fn student_table() -> DataTable {
    let table = DataTable::new(
        vec![
            NumericAttribute::new("StudyHours").into(),
            NumericAttribute::new("Attendance").into(),
            NumericAttribute::new("PreviousGrade").into(),
        ],
        NominalAttribute::new("Pass", ["Yes", "No"]),
    );
    fill(table, &STUDENT_ROWS)
}
