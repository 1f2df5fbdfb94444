#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PricingPeriod {
    #[default]
    Monthly,
    Annual,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub monthly: u32,
    pub annual: u32,
    pub features: &'static [&'static str],
}

impl PricingPlan {
    pub fn price_label(&self, period: PricingPeriod) -> String {
        match period {
            PricingPeriod::Monthly => format!("${}/month", self.monthly),
            PricingPeriod::Annual => format!("${}/year", self.annual),
        }
    }
}

pub const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        monthly: 19,
        annual: 190,
        features: &["3 products per month", "7-day trials", "Free return shipping"],
    },
    PricingPlan {
        name: "Explorer",
        monthly: 39,
        annual: 390,
        features: &["8 products per month", "14-day trials", "Priority support"],
    },
    PricingPlan {
        name: "Unlimited",
        monthly: 79,
        annual: 790,
        features: &["Unlimited products", "30-day trials", "Early access to launches"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_selected_period() {
        let plan = &PLANS[0];
        assert_eq!(plan.price_label(PricingPeriod::Monthly), "$19/month");
        assert_eq!(plan.price_label(PricingPeriod::Annual), "$190/year");
    }
}
