//! Built-in course catalog
//!
//! Professional tax preparation: eight chapters, each with four or five
//! modules and one homework assignment.

use super::model::{
    Chapter, HomeworkAssignment, HomeworkKind, Module, ModuleKind, Resource, ResourceKind,
};

/// Title of the built-in course
pub const COURSE_TITLE: &str = "Professional Tax Preparation";

/// A named external link shown outside any module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// Quick links shown at the bottom of the sidebar
pub const REFERENCE_LINKS: &[ReferenceLink] = &[
    ReferenceLink { title: "IRS Forms & Publications", url: "https://www.irs.gov/forms-pubs" },
    ReferenceLink {
        title: "AICPA Tax Guides",
        url: "https://www.aicpa.org/resources/download/tax-practice-guides",
    },
];

/// Reference resources shared across modules, in catalog order
pub fn credible_resources() -> [Resource; 5] {
    [
        Resource::new(
            "irs-pub17",
            "IRS Publication 17 - Your Federal Income Tax",
            "https://www.irs.gov/publications/p17",
            ResourceKind::Irs,
            "Comprehensive guide to federal income tax for individuals",
        ),
        Resource::new(
            "irs-pub334",
            "IRS Publication 334 - Tax Guide for Small Business",
            "https://www.irs.gov/publications/p334",
            ResourceKind::Irs,
            "Essential tax information for small business owners",
        ),
        Resource::new(
            "aicpa-tax-guide",
            "AICPA Tax Practice Guides",
            "https://www.aicpa.org/resources/download/tax-practice-guides",
            ResourceKind::Aicpa,
            "Professional tax preparation standards and best practices",
        ),
        Resource::new(
            "irs-form-1040",
            "Form 1040 - U.S. Individual Income Tax Return",
            "https://www.irs.gov/forms-pubs/about-form-1040",
            ResourceKind::Form,
            "Primary individual income tax return form",
        ),
        Resource::new(
            "irs-schedule-a",
            "Schedule A - Itemized Deductions",
            "https://www.irs.gov/forms-pubs/about-schedule-a-form-1040",
            ResourceKind::Form,
            "Form for claiming itemized deductions",
        ),
    ]
}

/// Build the full course tree with all learner state cleared
pub fn course_chapters() -> Vec<Chapter> {
    let [pub17, pub334, aicpa, form1040, schedule_a] = credible_resources();

    use HomeworkKind::*;
    use ModuleKind::*;

    vec![
        Chapter::new(
            "chapter-1",
            "Introduction to Tax Preparation",
            "Fundamentals of tax law, ethics, and professional standards for accounting firms",
            "2 hours",
        )
        .with_module(
            Module::new(
                "mod-1-1",
                "Tax System Overview",
                Video,
                "Understanding the U.S. tax system structure and key principles",
                "30 min",
            )
            .with_resources([pub17.clone(), aicpa.clone()]),
        )
        .with_module(
            Module::new(
                "mod-1-2",
                "Professional Ethics & Standards",
                Reading,
                "AICPA Code of Professional Conduct and IRS Circular 230 requirements",
                "45 min",
            )
            .with_resources([aicpa.clone()]),
        )
        .with_module(Module::new(
            "mod-1-3",
            "Client Confidentiality & Privacy",
            Interactive,
            "Understanding client privacy laws and data protection requirements",
            "30 min",
        ))
        .with_module(Module::new(
            "mod-1-4",
            "Chapter 1 Assessment",
            Quiz,
            "Test your understanding of tax preparation fundamentals",
            "15 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-1-1",
            "Ethics Case Study Analysis",
            "Analyze three ethical scenarios commonly faced by tax preparers",
            CaseStudy,
            "2024-02-15",
        )),
        Chapter::new(
            "chapter-2",
            "Individual Income Tax Basics",
            "Core concepts of individual taxation including filing status and income types",
            "3 hours",
        )
        .with_module(
            Module::new(
                "mod-2-1",
                "Filing Status Determination",
                Video,
                "Single, Married Filing Jointly, Head of Household, and other filing statuses",
                "45 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-2-2",
                "Types of Income",
                Reading,
                "Wages, interest, dividends, capital gains, and other income sources",
                "60 min",
            )
            .with_resources([pub17.clone(), form1040.clone()]),
        )
        .with_module(
            Module::new(
                "mod-2-3",
                "Form 1040 Walkthrough",
                Interactive,
                "Step-by-step completion of Form 1040 with real examples",
                "60 min",
            )
            .with_resources([form1040]),
        )
        .with_module(Module::new(
            "mod-2-4",
            "Chapter 2 Assessment",
            Quiz,
            "Test your knowledge of individual income tax basics",
            "15 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-2-1",
            "Form 1040 Practice",
            "Complete three sample Form 1040 returns with different scenarios",
            FormPractice,
            "2024-02-22",
        )),
        Chapter::new(
            "chapter-3",
            "Deductions and Credits",
            "Standard vs. itemized deductions, tax credits, and optimization strategies",
            "4 hours",
        )
        .with_module(
            Module::new(
                "mod-3-1",
                "Standard vs. Itemized Deductions",
                Video,
                "When to itemize and how to maximize deduction benefits",
                "45 min",
            )
            .with_resources([pub17.clone(), schedule_a.clone()]),
        )
        .with_module(
            Module::new(
                "mod-3-2",
                "Schedule A Deep Dive",
                Interactive,
                "Medical expenses, taxes, interest, gifts, and miscellaneous deductions",
                "90 min",
            )
            .with_resources([schedule_a]),
        )
        .with_module(
            Module::new(
                "mod-3-3",
                "Tax Credits Overview",
                Reading,
                "Child Tax Credit, EITC, Education Credits, and other common credits",
                "60 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(Module::new(
            "mod-3-4",
            "Chapter 3 Assessment",
            Quiz,
            "Test your understanding of deductions and credits",
            "25 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-3-1",
            "Deduction Optimization Exercise",
            "Analyze client scenarios to determine optimal deduction strategy",
            Calculation,
            "2024-03-01",
        )),
        Chapter::new(
            "chapter-4",
            "Business Income and Expenses",
            "Self-employment income, Schedule C, and business deductions",
            "3.5 hours",
        )
        .with_module(
            Module::new(
                "mod-4-1",
                "Self-Employment Basics",
                Video,
                "Understanding self-employment income and Schedule SE",
                "45 min",
            )
            .with_resources([pub334.clone()]),
        )
        .with_module(
            Module::new(
                "mod-4-2",
                "Schedule C Preparation",
                Interactive,
                "Profit or loss from business - line-by-line completion",
                "90 min",
            )
            .with_resources([pub334.clone()]),
        )
        .with_module(
            Module::new(
                "mod-4-3",
                "Business Expense Categories",
                Reading,
                "Ordinary and necessary business expenses, home office deduction",
                "60 min",
            )
            .with_resources([pub334]),
        )
        .with_module(Module::new(
            "mod-4-4",
            "Chapter 4 Assessment",
            Quiz,
            "Test your knowledge of business income and expenses",
            "15 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-4-1",
            "Schedule C Case Study",
            "Complete Schedule C for a freelance consultant with mixed expenses",
            FormPractice,
            "2024-03-08",
        )),
        Chapter::new(
            "chapter-5",
            "Investment Income and Capital Gains",
            "Stocks, bonds, mutual funds, and capital gains/losses reporting",
            "3 hours",
        )
        .with_module(
            Module::new(
                "mod-5-1",
                "Investment Income Types",
                Video,
                "Interest, dividends, and capital distributions",
                "45 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-5-2",
                "Capital Gains and Losses",
                Interactive,
                "Schedule D preparation and capital loss limitations",
                "75 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-5-3",
                "Form 8949 Requirements",
                Reading,
                "Detailed capital gains reporting and basis calculations",
                "45 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(Module::new(
            "mod-5-4",
            "Chapter 5 Assessment",
            Quiz,
            "Test your understanding of investment income",
            "15 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-5-1",
            "Investment Portfolio Analysis",
            "Calculate capital gains/losses for a complex investment portfolio",
            Calculation,
            "2024-03-15",
        )),
        Chapter::new(
            "chapter-6",
            "Retirement and Education Planning",
            "IRA contributions, 401(k) plans, and education tax benefits",
            "2.5 hours",
        )
        .with_module(
            Module::new(
                "mod-6-1",
                "Retirement Account Contributions",
                Video,
                "Traditional vs. Roth IRA, 401(k) contributions and limits",
                "45 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-6-2",
                "Education Tax Benefits",
                Reading,
                "American Opportunity Credit, Lifetime Learning Credit, and 529 plans",
                "60 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-6-3",
                "Retirement Distribution Rules",
                Interactive,
                "Early withdrawal penalties and required minimum distributions",
                "30 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(Module::new(
            "mod-6-4",
            "Chapter 6 Assessment",
            Quiz,
            "Test your knowledge of retirement and education planning",
            "15 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-6-1",
            "Retirement Planning Scenario",
            "Optimize retirement contributions for different age groups and income levels",
            CaseStudy,
            "2024-03-22",
        )),
        Chapter::new(
            "chapter-7",
            "Special Situations and Advanced Topics",
            "Rental property, foreign income, and complex tax situations",
            "4 hours",
        )
        .with_module(
            Module::new(
                "mod-7-1",
                "Rental Property Income",
                Video,
                "Schedule E preparation and rental property deductions",
                "60 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-7-2",
                "Foreign Income Reporting",
                Reading,
                "FBAR requirements and foreign tax credit",
                "45 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-7-3",
                "Alternative Minimum Tax",
                Interactive,
                "AMT calculation and planning strategies",
                "60 min",
            )
            .with_resources([pub17.clone()]),
        )
        .with_module(
            Module::new(
                "mod-7-4",
                "Divorce and Separation Issues",
                Reading,
                "Alimony, child support, and property transfers",
                "30 min",
            )
            .with_resources([pub17]),
        )
        .with_module(Module::new(
            "mod-7-5",
            "Chapter 7 Assessment",
            Quiz,
            "Test your understanding of special tax situations",
            "25 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-7-1",
            "Complex Tax Return Project",
            "Complete a comprehensive tax return with multiple schedules and forms",
            FormPractice,
            "2024-03-29",
        )),
        Chapter::new(
            "chapter-8",
            "Professional Practice and Client Management",
            "Client communication, documentation, and professional development",
            "2 hours",
        )
        .with_module(
            Module::new(
                "mod-8-1",
                "Client Interview Techniques",
                Video,
                "Effective client communication and information gathering",
                "45 min",
            )
            .with_resources([aicpa.clone()]),
        )
        .with_module(
            Module::new(
                "mod-8-2",
                "Documentation and Record Keeping",
                Reading,
                "Professional documentation standards and audit preparation",
                "30 min",
            )
            .with_resources([aicpa.clone()]),
        )
        .with_module(
            Module::new(
                "mod-8-3",
                "Continuing Education Requirements",
                Interactive,
                "Professional development and staying current with tax law changes",
                "30 min",
            )
            .with_resources([aicpa]),
        )
        .with_module(Module::new(
            "mod-8-4",
            "Final Comprehensive Assessment",
            Quiz,
            "Comprehensive test covering all course material",
            "15 min",
        ))
        .with_homework(HomeworkAssignment::new(
            "hw-8-1",
            "Professional Portfolio Development",
            "Create a professional portfolio showcasing your tax preparation skills",
            Research,
            "2024-04-05",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eight_chapters() {
        assert_eq!(course_chapters().len(), 8);
    }

    #[test]
    fn chapter_one_has_four_modules() {
        let chapters = course_chapters();
        assert_eq!(chapters[0].id, "chapter-1");
        assert_eq!(chapters[0].modules.len(), 4);
    }

    #[test]
    fn ids_are_unique() {
        let chapters = course_chapters();
        let mut seen = HashSet::new();
        for chapter in &chapters {
            assert!(seen.insert(chapter.id.clone()));
            for module in &chapter.modules {
                assert!(seen.insert(module.id.clone()), "duplicate {}", module.id);
            }
            for hw in &chapter.homework {
                assert!(seen.insert(hw.id.clone()), "duplicate {}", hw.id);
            }
        }
    }

    #[test]
    fn catalog_starts_pristine() {
        for chapter in course_chapters() {
            assert!(!chapter.completed);
            assert_eq!(chapter.progress, 0.0);
            assert!(chapter.modules.iter().all(|m| !m.completed));
            assert!(chapter.homework.iter().all(|h| !h.completed && h.grade.is_none()));
        }
    }

    #[test]
    fn all_due_dates_parse() {
        for chapter in course_chapters() {
            for hw in &chapter.homework {
                assert!(hw.due().is_some(), "bad due date on {}", hw.id);
            }
        }
    }
}
