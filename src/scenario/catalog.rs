//! Life-stage scenario catalog
//!
//! Declarative table of decision templates grouped by life stage. Each group
//! carries its own age anchor and stride; the generator reads this table and
//! never hard-codes a stage.

use once_cell::sync::Lazy;
use serde::Serialize;
use smallvec::smallvec;

use super::types::{Choice, ChoiceList, Decision, RiskLevel, TimeHorizon};
use crate::finance::FinancialImpact;

use RiskLevel::{High, Low, Medium};
use TimeHorizon::{Long, Medium as Mid, Short};

/// Life stage a template group belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifeStage {
    Teenager,
    YoungAdult,
    EarlyCareer,
    MidCareer,
    PreRetirement,
    Universal,
}

/// How a group places its first template on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeAnchor {
    /// `max(starting_age, base)`
    AtLeast(i32),
    /// `starting_age + offset`
    AfterStart(i32),
}

/// A decision before it is scheduled at an age
#[derive(Debug, Clone)]
pub struct DecisionTemplate {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub choices: ChoiceList,
}

impl DecisionTemplate {
    /// Schedule the template at an age; the id gets the age appended
    pub fn instantiate(&self, age: i32) -> Decision {
        Decision {
            id: format!("{}-{}", self.id, age),
            age,
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            choices: self.choices.clone(),
            selected_choice: None,
        }
    }
}

/// Ordered templates for one life stage plus its scheduling parameters
#[derive(Debug, Clone)]
pub struct LifeStageGroup {
    pub stage: LifeStage,
    pub anchor: AgeAnchor,
    /// Years between consecutive templates of this group
    pub stride: i32,
    /// Latest starting age for which the group is included; `None` means always
    pub max_starting_age: Option<i32>,
    pub templates: Vec<DecisionTemplate>,
}

impl LifeStageGroup {
    /// Whether a game started at `starting_age` includes this group
    #[inline]
    pub fn applies_to(&self, starting_age: i32) -> bool {
        self.max_starting_age
            .map_or(true, |max| starting_age <= max)
    }

    /// Scheduled age of the template at `index`
    #[inline]
    pub fn age_for(&self, starting_age: i32, index: usize) -> i32 {
        let first = match self.anchor {
            AgeAnchor::AtLeast(base) => starting_age.max(base),
            AgeAnchor::AfterStart(offset) => starting_age + offset,
        };
        first + index as i32 * self.stride
    }
}

/// The built-in catalog
pub static LIFE_STAGE_CATALOG: Lazy<Vec<LifeStageGroup>> = Lazy::new(build_catalog);

fn template(
    id: &'static str,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    choices: ChoiceList,
) -> DecisionTemplate {
    DecisionTemplate {
        id,
        category,
        title,
        description,
        choices,
    }
}

fn build_catalog() -> Vec<LifeStageGroup> {
    vec![
        LifeStageGroup {
            stage: LifeStage::Teenager,
            anchor: AgeAnchor::AtLeast(14),
            stride: 1,
            max_starting_age: Some(17),
            templates: teenager_templates(),
        },
        LifeStageGroup {
            stage: LifeStage::YoungAdult,
            anchor: AgeAnchor::AtLeast(18),
            stride: 2,
            max_starting_age: Some(25),
            templates: young_adult_templates(),
        },
        LifeStageGroup {
            stage: LifeStage::EarlyCareer,
            anchor: AgeAnchor::AtLeast(25),
            stride: 3,
            max_starting_age: Some(35),
            templates: early_career_templates(),
        },
        LifeStageGroup {
            stage: LifeStage::MidCareer,
            anchor: AgeAnchor::AtLeast(35),
            stride: 4,
            max_starting_age: Some(50),
            templates: mid_career_templates(),
        },
        LifeStageGroup {
            stage: LifeStage::PreRetirement,
            anchor: AgeAnchor::AtLeast(50),
            stride: 3,
            max_starting_age: None,
            templates: pre_retirement_templates(),
        },
        LifeStageGroup {
            stage: LifeStage::Universal,
            anchor: AgeAnchor::AfterStart(5),
            stride: 8,
            max_starting_age: None,
            templates: universal_templates(),
        },
    ]
}

fn teenager_templates() -> Vec<DecisionTemplate> {
    vec![
        template(
            "first-job",
            "Career",
            "Your First Job",
            "You're ready to start earning your own money. What's your first job?",
            smallvec![
                Choice::new(
                    "part-time-retail",
                    "Part-time retail job",
                    "Learn customer service and work ethic while earning spending money.",
                    FinancialImpact::new().income(8_000.0).expenses(100.0),
                    Low,
                    Short,
                ),
                Choice::new(
                    "tutoring",
                    "Tutoring younger students",
                    "Use your academic skills to help others while earning good money.",
                    FinancialImpact::new().income(6_000.0).expenses(50.0),
                    Low,
                    Short,
                ),
                Choice::new(
                    "online-business",
                    "Start small online business",
                    "Learn entrepreneurship early but with uncertain income.",
                    FinancialImpact::new().income(4_000.0).expenses(200.0).savings(-500.0),
                    Medium,
                    Mid,
                ),
                Choice::new(
                    "focus-studies",
                    "Focus on studies instead of working",
                    "Prioritize education and grades over earning money now.",
                    FinancialImpact::new().expenses(50.0),
                    Low,
                    Long,
                ),
            ],
        ),
        template(
            "money-management",
            "Savings",
            "Learning Money Management",
            "You've started earning money. How do you manage it?",
            smallvec![
                Choice::new(
                    "save-most",
                    "Save 70% of earnings",
                    "Build strong savings habits early and watch money grow.",
                    FinancialImpact::new().savings(3_000.0).expenses(-100.0),
                    Low,
                    Long,
                ),
                Choice::new(
                    "balanced-approach",
                    "Save 40%, spend 60%",
                    "Balance saving for the future with enjoying your teenage years.",
                    FinancialImpact::new().savings(1_500.0).expenses(200.0),
                    Low,
                    Mid,
                ),
                Choice::new(
                    "spend-most",
                    "Spend most, save a little",
                    "Enjoy your money now while you're young.",
                    FinancialImpact::new().savings(500.0).expenses(400.0),
                    Medium,
                    Short,
                ),
                Choice::new(
                    "learn-investing",
                    "Start learning about investing",
                    "Begin investing small amounts to learn about the stock market.",
                    FinancialImpact::new()
                        .savings(1_000.0)
                        .investments(1_000.0)
                        .expenses(100.0),
                    Medium,
                    Long,
                ),
            ],
        ),
        template(
            "financial-education",
            "Education",
            "Financial Education",
            "How do you learn about money and personal finance?",
            smallvec![
                Choice::new(
                    "take-finance-class",
                    "Take personal finance class at school",
                    "Get formal education about budgeting, investing, and financial planning.",
                    FinancialImpact::new().expenses(100.0),
                    Low,
                    Long,
                ),
                Choice::new(
                    "read-books",
                    "Read finance books and blogs",
                    "Self-educate through books, podcasts, and online resources.",
                    FinancialImpact::new().expenses(50.0).savings(200.0),
                    Low,
                    Long,
                ),
                Choice::new(
                    "learn-by-doing",
                    "Learn by trial and error",
                    "Figure out money management through experience.",
                    FinancialImpact::new().savings(-300.0),
                    Medium,
                    Mid,
                ),
                Choice::new(
                    "family-guidance",
                    "Learn from family members",
                    "Get financial advice and guidance from parents/relatives.",
                    FinancialImpact::new().savings(500.0),
                    Low,
                    Long,
                ),
            ],
        ),
        template(
            "big-purchase",
            "Lifestyle",
            "Your First Big Purchase",
            "You've saved up money and want to make your first big purchase. What do you choose?",
            smallvec![
                Choice::new(
                    "gaming-setup",
                    "Gaming computer/console setup",
                    "Invest in entertainment and potentially content creation.",
                    FinancialImpact::new().savings(-1_500.0).expenses(50.0),
                    Low,
                    Short,
                ),
                Choice::new(
                    "car-savings",
                    "Save for a car",
                    "Start saving for transportation independence.",
                    FinancialImpact::new().savings(2_000.0).expenses(-50.0),
                    Low,
                    Mid,
                ),
                Choice::new(
                    "investment-account",
                    "Open investment account",
                    "Start investing for long-term wealth building.",
                    FinancialImpact::new().savings(-1_000.0).investments(1_000.0),
                    Medium,
                    Long,
                ),
                Choice::new(
                    "education-fund",
                    "Save for college expenses",
                    "Build a fund for future education costs.",
                    FinancialImpact::new().savings(2_500.0).expenses(-100.0),
                    Low,
                    Long,
                ),
            ],
        ),
    ]
}

fn young_adult_templates() -> Vec<DecisionTemplate> {
    vec![
        template(
            "education-path",
            "Education",
            "Your Educational Journey",
            "How do you want to pursue your education and career?",
            smallvec![
                Choice::new(
                    "college-degree",
                    "Go to college (4-year degree)",
                    "College provides higher earning potential but comes with student debt.",
                    FinancialImpact::new().debt(40_000.0).expenses(800.0),
                    Medium,
                    Long,
                )
                .with_tip("College graduates earn on average $1.2M more over their lifetime, but student loan debt can take 10-20 years to pay off. Consider in-state tuition and community college for first two years to reduce costs."),
                Choice::new(
                    "community-college",
                    "Start at community college",
                    "More affordable education path with lower debt burden.",
                    FinancialImpact::new().debt(15_000.0).expenses(400.0),
                    Low,
                    Mid,
                )
                .with_tip("Community college can save you $20,000+ compared to 4-year universities. Many successful people started at community college and transferred to complete their degree."),
                Choice::new(
                    "trade-school",
                    "Attend trade school",
                    "Faster entry into workforce with practical skills.",
                    FinancialImpact::new().debt(20_000.0).income(35_000.0).expenses(300.0),
                    Low,
                    Short,
                )
                .with_tip("Skilled trades are in high demand with median salaries of $50,000-$80,000. Many trades offer apprenticeships that pay while you learn, and there's less job outsourcing risk."),
                Choice::new(
                    "work-immediately",
                    "Enter workforce immediately",
                    "Start earning right away but with limited advancement opportunities.",
                    FinancialImpact::new().income(25_000.0).expenses(200.0),
                    Medium,
                    Short,
                )
                .with_tip("Starting work immediately gives you a 4-year head start on earning and saving. However, lifetime earnings may be lower without additional education or skills training."),
            ],
        ),
        template(
            "first-job",
            "Career",
            "Your First Real Job",
            "You have job offers. Which opportunity do you choose?",
            smallvec![
                Choice::new(
                    "corporate-job",
                    "Corporate position with benefits",
                    "Stable income with good benefits and career advancement potential.",
                    FinancialImpact::new().income(45_000.0).expenses(600.0).credit_score(20),
                    Low,
                    Long,
                )
                .with_tip("Corporate jobs often provide health insurance, 401(k) matching, and career development opportunities. The stability can be worth more than a higher salary elsewhere."),
                Choice::new(
                    "startup-job",
                    "Startup with equity potential",
                    "Lower salary but potential for significant equity gains.",
                    FinancialImpact::new().income(35_000.0).expenses(400.0),
                    High,
                    Long,
                )
                .with_tip("Startup equity can be worth millions if the company succeeds, but 90% of startups fail. Consider your risk tolerance and financial obligations."),
                Choice::new(
                    "freelance-work",
                    "Freelance/consulting work",
                    "Flexible schedule but irregular income and no benefits.",
                    FinancialImpact::new().income(40_000.0).expenses(800.0),
                    Medium,
                    Short,
                )
                .with_tip("Freelancers must save extra for taxes (25-30%), health insurance, and retirement since there's no employer contribution. Consider setting aside 40% of income for these costs."),
            ],
        ),
    ]
}

fn early_career_templates() -> Vec<DecisionTemplate> {
    vec![
        template(
            "housing-decision",
            "Housing",
            "Where Will You Live?",
            "What's your housing strategy?",
            smallvec![
                Choice::new(
                    "rent-apartment",
                    "Rent a nice apartment",
                    "Flexibility to move but no equity building.",
                    FinancialImpact::new().expenses(1_200.0),
                    Low,
                    Short,
                )
                .with_tip("Renting makes sense if you plan to move within 5 years, can't afford a 20% down payment, or want to invest the difference in the stock market."),
                Choice::new(
                    "buy-condo",
                    "Buy a small condo",
                    "Building equity but taking on mortgage debt.",
                    FinancialImpact::new()
                        .debt(180_000.0)
                        .expenses(1_400.0)
                        .investments(20_000.0),
                    Medium,
                    Long,
                )
                .with_tip("Homeownership builds wealth through equity and tax deductions, but requires 20% down payment to avoid PMI and budget 1-3% annually for maintenance."),
                Choice::new(
                    "live-with-roommates",
                    "Share housing with roommates",
                    "Most affordable option for more savings.",
                    FinancialImpact::new().expenses(600.0),
                    Low,
                    Mid,
                )
                .with_tip("Living with roommates can save $500-1000/month. Investing this difference in index funds could be worth $200,000+ over 20 years."),
            ],
        ),
        template(
            "emergency-fund",
            "Savings",
            "Building Your Safety Net",
            "How do you approach building an emergency fund?",
            smallvec![
                Choice::new(
                    "aggressive-savings",
                    "Save 6 months of expenses aggressively",
                    "Strong financial security but requires lifestyle sacrifices.",
                    FinancialImpact::new().savings(15_000.0).expenses(300.0),
                    Low,
                    Short,
                )
                .with_tip("A 6-month emergency fund protects against job loss, medical bills, and major repairs. It prevents you from going into debt during crises."),
                Choice::new(
                    "moderate-savings",
                    "Build 3-month emergency fund gradually",
                    "Balanced approach to emergency preparedness.",
                    FinancialImpact::new().savings(8_000.0).expenses(100.0),
                    Low,
                    Short,
                )
                .with_tip("A 3-month emergency fund covers most short-term crises while allowing you to invest more for long-term growth. Good balance of security and opportunity."),
                Choice::new(
                    "minimal-savings",
                    "Keep minimal emergency fund, invest the rest",
                    "Higher risk but potentially higher returns.",
                    FinancialImpact::new().savings(3_000.0).investments(8_000.0),
                    High,
                    Long,
                )
                .with_tip("This strategy works if you have stable income and other safety nets (family support, good insurance). One emergency could force you to sell investments at a loss."),
            ],
        ),
    ]
}

fn mid_career_templates() -> Vec<DecisionTemplate> {
    vec![
        template(
            "career-advancement",
            "Career",
            "Career Growth Opportunity",
            "You have an opportunity for a major career move. What do you choose?",
            smallvec![
                Choice::new(
                    "promotion-current",
                    "Accept promotion at current company",
                    "Steady advancement with people you know and trust.",
                    FinancialImpact::new().income(15_000.0).expenses(200.0),
                    Low,
                    Mid,
                )
                .with_tip("Internal promotions often come with better work-life balance and job security. You already know the company culture and have established relationships."),
                Choice::new(
                    "new-company",
                    "Take higher-paying job at new company",
                    "Significant salary increase but requires adapting to new environment.",
                    FinancialImpact::new().income(25_000.0).expenses(400.0),
                    Medium,
                    Mid,
                )
                .with_tip("Job hopping can accelerate salary growth - external hires often get 10-20% more than internal promotions. Just ensure the new role aligns with your career goals."),
                Choice::new(
                    "start-business",
                    "Start your own business",
                    "High risk but unlimited earning potential if successful.",
                    FinancialImpact::new()
                        .income(-20_000.0)
                        .expenses(1_000.0)
                        .savings(-15_000.0),
                    High,
                    Long,
                )
                .with_tip("Most businesses fail within 5 years, but successful entrepreneurs can build significant wealth. Ensure you have 6-12 months of expenses saved before starting."),
            ],
        ),
        template(
            "investment-strategy",
            "Investment",
            "Investment Strategy",
            "How do you approach investing for the future?",
            smallvec![
                Choice::new(
                    "conservative-portfolio",
                    "Conservative portfolio (bonds, CDs)",
                    "Lower risk but also lower potential returns.",
                    FinancialImpact::new().investments(25_000.0).savings(-25_000.0),
                    Low,
                    Long,
                )
                .with_tip("Conservative portfolios protect against market crashes but may not beat inflation long-term. With decades until retirement there is time to recover from market downturns."),
                Choice::new(
                    "balanced-portfolio",
                    "Balanced portfolio (60% stocks, 40% bonds)",
                    "Moderate risk with steady long-term growth potential.",
                    FinancialImpact::new().investments(25_000.0).savings(-25_000.0),
                    Medium,
                    Long,
                )
                .with_tip("The 60/40 portfolio is a classic allocation that balances growth with stability. Historically returns 7-8% annually with moderate volatility."),
                Choice::new(
                    "aggressive-portfolio",
                    "Aggressive portfolio (90% stocks)",
                    "Higher risk but potentially much higher returns over time.",
                    FinancialImpact::new().investments(25_000.0).savings(-25_000.0),
                    High,
                    Long,
                )
                .with_tip("Investors with a long horizon can handle more risk since they have time to recover from market downturns. The S&P 500 has averaged 10% annually over the long term."),
            ],
        ),
    ]
}

fn pre_retirement_templates() -> Vec<DecisionTemplate> {
    vec![
        template(
            "retirement-planning",
            "Retirement",
            "Retirement Planning Strategy",
            "How do you maximize your retirement savings?",
            smallvec![
                Choice::new(
                    "max-401k",
                    "Maximize 401(k) contributions",
                    "Contribute the maximum allowed for tax benefits and employer matching.",
                    FinancialImpact::new().investments(50_000.0).expenses(1_500.0),
                    Low,
                    Long,
                )
                .with_tip("In 2024, you can contribute up to $23,000 to a 401(k), plus $7,500 catch-up if you're 50+. Employer matches are free money!"),
                Choice::new(
                    "balanced-retirement",
                    "Balanced approach with IRA and 401(k)",
                    "Diversify retirement savings across different account types.",
                    FinancialImpact::new().investments(35_000.0).expenses(1_000.0),
                    Low,
                    Long,
                )
                .with_tip("Traditional vs Roth accounts offer different tax advantages. Traditional gives immediate deductions, Roth provides tax-free withdrawals in retirement."),
                Choice::new(
                    "catch-up-aggressive",
                    "Aggressive catch-up strategy",
                    "Drastically increase savings to catch up on retirement planning.",
                    FinancialImpact::new().investments(75_000.0).expenses(2_000.0),
                    Medium,
                    Long,
                )
                .with_tip("If you're behind on retirement savings, the \"catch-up\" contribution limits allow extra savings. Time is your biggest asset in retirement planning."),
            ],
        ),
        template(
            "healthcare-costs",
            "Healthcare",
            "Healthcare Planning",
            "How do you plan for medical expenses in retirement?",
            smallvec![
                Choice::new(
                    "hsa-max",
                    "Maximize Health Savings Account (HSA)",
                    "Use HSA as a retirement healthcare fund.",
                    FinancialImpact::new().investments(15_000.0).expenses(400.0),
                    Low,
                    Long,
                )
                .with_tip("HSAs offer triple tax benefits: deductible contributions, tax-free growth, and tax-free withdrawals for medical expenses. After 65, you can withdraw for any purpose (taxed as income)."),
                Choice::new(
                    "health-insurance",
                    "Purchase comprehensive health insurance",
                    "Invest in better health coverage now.",
                    FinancialImpact::new().expenses(800.0),
                    Low,
                    Mid,
                )
                .with_tip("Healthcare costs average $300,000+ per person in retirement. Good insurance and preventive care can save significant money long-term."),
                Choice::new(
                    "self-insure",
                    "Self-insure with basic coverage",
                    "Save money on premiums but take on more risk.",
                    FinancialImpact::new().savings(10_000.0).expenses(200.0),
                    High,
                    Short,
                )
                .with_tip("Self-insuring can work if you have substantial savings, but one major medical event can be financially devastating. Consider your risk tolerance carefully."),
            ],
        ),
    ]
}

fn universal_templates() -> Vec<DecisionTemplate> {
    vec![
        template(
            "unexpected-expense",
            "Crisis",
            "Unexpected Major Expense",
            "You face an unexpected major expense. How do you handle it?",
            smallvec![
                Choice::new(
                    "use-emergency-fund",
                    "Use emergency fund",
                    "Tap into your emergency savings to cover the expense.",
                    FinancialImpact::new().savings(-8_000.0),
                    Low,
                    Short,
                ),
                Choice::new(
                    "take-loan",
                    "Take out a loan",
                    "Borrow money to cover the expense.",
                    FinancialImpact::new().debt(8_000.0).expenses(200.0),
                    Medium,
                    Mid,
                ),
                Choice::new(
                    "payment-plan",
                    "Set up payment plan",
                    "Arrange to pay the expense over time.",
                    FinancialImpact::new().expenses(300.0),
                    Low,
                    Short,
                ),
            ],
        ),
        template(
            "windfall",
            "Opportunity",
            "Unexpected Windfall",
            "You receive an unexpected sum of money. What do you do with it?",
            smallvec![
                Choice::new(
                    "invest-windfall",
                    "Invest it all",
                    "Put the money into investments for long-term growth.",
                    FinancialImpact::new().investments(15_000.0),
                    Medium,
                    Long,
                ),
                Choice::new(
                    "split-windfall",
                    "Split between savings and investments",
                    "Diversify the windfall between safe savings and investments.",
                    FinancialImpact::new().savings(7_500.0).investments(7_500.0),
                    Low,
                    Mid,
                ),
                Choice::new(
                    "pay-debt",
                    "Pay down debt",
                    "Use the money to reduce existing debt.",
                    FinancialImpact::new().debt(-15_000.0),
                    Low,
                    Short,
                ),
                Choice::new(
                    "lifestyle-upgrade",
                    "Upgrade lifestyle",
                    "Spend the money on improving your quality of life.",
                    FinancialImpact::new().expenses(300.0).lifestyle(crate::finance::Lifestyle::Comfortable),
                    Medium,
                    Short,
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_every_stage() {
        let stages: Vec<LifeStage> = LIFE_STAGE_CATALOG.iter().map(|g| g.stage).collect();
        assert_eq!(
            stages,
            vec![
                LifeStage::Teenager,
                LifeStage::YoungAdult,
                LifeStage::EarlyCareer,
                LifeStage::MidCareer,
                LifeStage::PreRetirement,
                LifeStage::Universal,
            ]
        );
    }

    #[test]
    fn test_templates_have_three_or_four_choices() {
        for group in LIFE_STAGE_CATALOG.iter() {
            for t in &group.templates {
                assert!(
                    (3..=4).contains(&t.choices.len()),
                    "{} has {} choices",
                    t.id,
                    t.choices.len()
                );
            }
        }
    }

    #[test]
    fn test_choice_ids_unique_within_template() {
        for group in LIFE_STAGE_CATALOG.iter() {
            for t in &group.templates {
                let ids: HashSet<&str> = t.choices.iter().map(|c| c.id.as_str()).collect();
                assert_eq!(ids.len(), t.choices.len(), "duplicate choice id in {}", t.id);
            }
        }
    }

    #[test]
    fn test_group_inclusion_is_monotone() {
        for group in LIFE_STAGE_CATALOG.iter() {
            let mut was_included = true;
            for age in 14..=80 {
                let included = group.applies_to(age);
                assert!(was_included || !included, "{:?} re-enters at {}", group.stage, age);
                was_included = included;
            }
        }
    }

    #[test]
    fn test_age_for_anchors() {
        let teen = &LIFE_STAGE_CATALOG[0];
        assert_eq!(teen.age_for(14, 0), 14);
        assert_eq!(teen.age_for(16, 2), 18);

        let universal = &LIFE_STAGE_CATALOG[5];
        assert_eq!(universal.age_for(14, 0), 19);
        assert_eq!(universal.age_for(14, 1), 27);
    }

    #[test]
    fn test_instantiate_appends_age() {
        let t = &LIFE_STAGE_CATALOG[0].templates[0];
        let d = t.instantiate(14);
        assert_eq!(d.id, "first-job-14");
        assert_eq!(d.age, 14);
        assert!(d.selected_choice.is_none());
    }
}
