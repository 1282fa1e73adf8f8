use crate::catalog::SortKey;

/// One parsed line of menu input. Anything that isn't a known option code
/// is treated as a job-title lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Sort(SortKey),
    Compare,
    NewSearch,
    Save,
    Quit,
    Lookup(String),
}

pub fn parse(input: &str) -> MenuChoice {
    match input.trim() {
        "1" => MenuChoice::Sort(SortKey::MinSalary),
        "2" => MenuChoice::Sort(SortKey::MaxSalary),
        "3" => MenuChoice::Sort(SortKey::Deadline),
        "4" => MenuChoice::Sort(SortKey::StartDate),
        "5" => MenuChoice::Sort(SortKey::EndDate),
        "6" => MenuChoice::Sort(SortKey::PositionsAvailable),
        "7" => MenuChoice::Sort(SortKey::FullPart),
        "8" => MenuChoice::Sort(SortKey::TempReg),
        "9" => MenuChoice::Compare,
        "10" => MenuChoice::NewSearch,
        "save" => MenuChoice::Save,
        "quit" => MenuChoice::Quit,
        other => MenuChoice::Lookup(other.to_string()),
    }
}
