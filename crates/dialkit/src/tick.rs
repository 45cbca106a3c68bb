use strum::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum TickClass {
    Minor,
    Mid,
    Major,
}

impl TickClass {
    pub fn classify(value: i32) -> Self {
        if value % 10 == 0 {
            Self::Major
        } else if value % 5 == 0 {
            Self::Mid
        } else {
            Self::Minor
        }
    }

    pub fn is_labelled(&self) -> bool {
        *self == Self::Major
    }
}
