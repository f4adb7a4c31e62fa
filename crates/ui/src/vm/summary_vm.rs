use quiz_core::profile::ProfileResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub heading: &'static str,
    pub profile: String,
}

#[must_use]
pub fn map_summary(profile: ProfileResult) -> SummaryVm {
    SummaryVm {
        heading: "Résultat",
        profile: profile.label(),
    }
}
