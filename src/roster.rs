use crate::table::{Record, Table};

// Blank strings are fields the organizers still have to collect from the dojo.
const COMPETITORS: [[&str; 6]; 15] = [
    ["Akira", "Tanaka", "5'9\"", "165", "Black", "Rising Sun Dojo"],
    ["Maria", "Garcia", "5'4\"", "", "Brown", "Pacific Martial Arts"],
    ["James", "", "6'1\"", "190", "Black", "Iron Fist Academy"],
    ["", "Nguyen", "5'6\"", "140", "", "Dragon Spirit Karate"],
    ["Sarah", "Johnson", "", "130", "Green", "Eastside Karate Club"],
    ["Kenji", "Yamamoto", "5'7\"", "155", "Black", ""],
    ["Elena", "Petrov", "5'5\"", "", "", "Northern Wind Dojo"],
    ["David", "Kim", "5'10\"", "170", "Brown", "Summit Martial Arts"],
    ["Fatima", "", "5'3\"", "120", "Purple", "Crescent Moon Dojo"],
    ["Carlos", "Rivera", "", "", "Blue", "Sol Karate Academy"],
    ["", "O'Brien", "6'0\"", "185", "Black", "Celtic Tiger Dojo"],
    ["Yuki", "Sato", "5'2\"", "115", "Brown", ""],
    ["Marcus", "Thompson", "5'11\"", "175", "", "Warrior Path Dojo"],
    ["Lina", "Chen", "5'5\"", "125", "Green", "Jade Mountain Karate"],
    ["Andre", "", "", "200", "White", "Metro Karate Club"],
];

/// Builds the competitor table shown by the app.
pub fn build_roster() -> Table {
    Table::new(COMPETITORS.iter().map(|c| Record::new(*c)).collect())
}
