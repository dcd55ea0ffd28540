/// In-game storage limit for a material grade.
///
/// Grade 0 (special) and anything out of range map to `ungraded_cap`.
pub fn grade_to_cap(grade: u8, ungraded_cap: u32) -> u32 {
    match grade {
        1 => 300,
        2 => 250,
        3 => 200,
        4 => 150,
        5 => 100,
        _ => ungraded_cap,
    }
}
