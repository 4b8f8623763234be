/// A membership level the member can switch to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipTier {
    pub name: &'static str,
    /// Monthly price in NOK.
    pub price: u32,
}

static TIERS: [MembershipTier; 3] = [
    MembershipTier {
        name: "Vanlig medlemskap (500 kr)",
        price: 500,
    },
    MembershipTier {
        name: "Støttemedlemskap (300 kr)",
        price: 300,
    },
    MembershipTier {
        name: "Inaktiv (0 kr)",
        price: 0,
    },
];

// TODO: load tiers from the membership API once it exposes them.
pub fn tiers() -> &'static [MembershipTier] {
    &TIERS
}
