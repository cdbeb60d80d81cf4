//! Named category values used by the profile forms.
//!
//! Categorical slots store 1-14; 0 means "unspecified" and is never named here.

pub mod biological_sex {
    pub const MALE: u8 = 1;
    pub const FEMALE: u8 = 2;
    pub const INTERSEX: u8 = 3;
}

pub mod religion {
    pub const AGNOSTIC: u8 = 1;
    pub const ATHEIST: u8 = 2;
    pub const CHRISTIAN: u8 = 3;
    pub const JEWISH: u8 = 4;
    pub const MUSLIM: u8 = 5;
    pub const HINDU: u8 = 6;
    pub const BUDDHIST: u8 = 7;
    pub const SPIRITUAL: u8 = 8;
    pub const OTHER: u8 = 9;
}

/// Shared scale for DRINKING, SMOKING and DRUGS.
pub mod frequency {
    pub const NEVER: u8 = 1;
    pub const RARELY: u8 = 2;
    pub const SOCIALLY: u8 = 3;
    pub const OFTEN: u8 = 4;
}
