use strum_macros::{Display, EnumIter};

/// Chart tab in the detail view. Matches the keys of the embedded
/// catalog time series.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Timeframe {
    #[strum(serialize = "1D")]
    Day,
    #[strum(serialize = "1W")]
    Week,
    #[strum(serialize = "1M")]
    Month,
}

impl Timeframe {
    pub fn next(self) -> Self {
        match self {
            Timeframe::Day => Timeframe::Week,
            Timeframe::Week => Timeframe::Month,
            Timeframe::Month => Timeframe::Day,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Timeframe::Day => Timeframe::Month,
            Timeframe::Week => Timeframe::Day,
            Timeframe::Month => Timeframe::Week,
        }
    }
}
