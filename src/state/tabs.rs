//! Exclusive panel switching.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// View panels; exactly one is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Records,
    MonthlyTrend,
    ObservedTrend,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Records, Tab::MonthlyTrend, Tab::ObservedTrend];

    pub fn label(self) -> &'static str {
        match self {
            Self::Records => "Data View",
            Self::MonthlyTrend => "Monthly Trend",
            Self::ObservedTrend => "Observed Trend",
        }
    }

    /// DOM id of the panel element.
    pub fn panel_id(self) -> &'static str {
        match self {
            Self::Records => "DataView",
            Self::MonthlyTrend => "MonthlyTrend",
            Self::ObservedTrend => "ObservedTrend",
        }
    }
}

/// Loader to run after a panel becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendLoad {
    Monthly,
    Observed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn new(initial: Tab) -> Self {
        Self { active: initial }
    }

    pub fn active(self) -> Tab {
        self.active
    }

    pub fn is_active(self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Show `tab` and hide every other panel.
    ///
    /// Trend panels reload on every activation, including re-activation.
    pub fn activate(&mut self, tab: Tab) -> Option<TrendLoad> {
        self.active = tab;
        match tab {
            Tab::Records => None,
            Tab::MonthlyTrend => Some(TrendLoad::Monthly),
            Tab::ObservedTrend => Some(TrendLoad::Observed),
        }
    }
}
