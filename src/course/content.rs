//! Canned lesson content keyed by module id
//!
//! A handful of modules carry hand-written lesson material. Every other
//! module falls back to the default payload for its kind.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::model::{HomeworkKind, Module, ModuleKind};

/// A titled block of text inside a reading lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSection {
    pub heading: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

/// A single sample question shown in a quiz module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub tip: &'static str,
}

/// Lesson material for a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleContent {
    /// Video lesson: learning objectives and "what you'll learn" bullets
    Video { objectives: &'static [&'static str], highlights: &'static [&'static str] },
    /// Reading lesson: article sections plus a closing callout
    Reading { sections: &'static [ArticleSection], callout: Option<(&'static str, &'static str)> },
    /// Interactive exercise: a scenario and task choices
    Interactive { scenario: &'static str, tasks: &'static [&'static str] },
    /// Knowledge check with one sample question
    Quiz(SampleQuestion),
}

const VIDEO_OBJECTIVES: &[&str] = &[
    "Understand the fundamental concepts covered in this module",
    "Apply knowledge to real-world tax preparation scenarios",
    "Identify key resources and reference materials",
    "Master professional best practices and standards",
];

static DEFAULT_VIDEO: ModuleContent = ModuleContent::Video {
    objectives: VIDEO_OBJECTIVES,
    highlights: &[
        "Core concepts and terminology",
        "Practical application techniques",
        "Common mistakes to avoid",
        "Professional tips and strategies",
    ],
};

static DEFAULT_READING: ModuleContent = ModuleContent::Reading {
    sections: &[
        ArticleSection {
            heading: "Overview",
            body: "This reading module covers essential concepts that every tax professional \
                   must understand. The material is sourced from authoritative publications \
                   including IRS guidelines and AICPA standards.",
            bullets: &[],
        },
        ArticleSection {
            heading: "Key Learning Objectives",
            body: "",
            bullets: &[
                "Understand regulatory requirements and compliance standards",
                "Learn best practices for professional tax preparation",
                "Identify common scenarios and their proper handling",
                "Master documentation and record-keeping requirements",
            ],
        },
        ArticleSection {
            heading: "Study Tips",
            body: "",
            bullets: &[
                "Take detailed notes on key concepts and definitions",
                "Review the linked resources for additional context",
                "Consider how these concepts apply to real client situations",
                "Complete the practice exercises to reinforce learning",
            ],
        },
    ],
    callout: None,
};

static DEFAULT_INTERACTIVE: ModuleContent = ModuleContent::Interactive {
    scenario: "A client comes to you with multiple income sources including W-2 wages, \
               freelance income, and rental property. They want to know the best way to \
               organize their tax documents and maximize their deductions.",
    tasks: &[
        "Identify all required tax forms",
        "Organize supporting documentation",
        "Recommend a deduction strategy",
    ],
};

static DEFAULT_QUIZ: ModuleContent = ModuleContent::Quiz(SampleQuestion {
    question: "Which of the following is NOT a requirement for claiming the home office deduction?",
    options: [
        "The space must be used regularly and exclusively for business",
        "The space must be your principal place of business",
        "The space must be at least 200 square feet",
        "The space must be used to meet clients or customers",
    ],
    tip: "The home office deduction has specific IRS requirements - there is no minimum \
          square footage requirement.",
});

static MODULE_CONTENT: Lazy<HashMap<&'static str, ModuleContent>> = Lazy::new(|| {
    HashMap::from([
        (
            "mod-1-1",
            ModuleContent::Video {
                objectives: VIDEO_OBJECTIVES,
                highlights: &[
                    "Structure of the U.S. federal tax system",
                    "Key tax principles and concepts",
                    "Role of tax professionals in the system",
                    "Overview of major tax forms and schedules",
                ],
            },
        ),
        (
            "mod-2-1",
            ModuleContent::Video {
                objectives: VIDEO_OBJECTIVES,
                highlights: &[
                    "Single vs. Married Filing Jointly/Separately",
                    "Head of Household qualifications",
                    "Qualifying Widow(er) status",
                    "Impact of filing status on tax liability",
                ],
            },
        ),
        (
            "mod-3-1",
            ModuleContent::Video {
                objectives: VIDEO_OBJECTIVES,
                highlights: &[
                    "Standard deduction amounts by filing status",
                    "When itemizing provides greater benefit",
                    "Common itemized deductions",
                    "Strategies for maximizing deductions",
                ],
            },
        ),
        (
            "mod-1-2",
            ModuleContent::Reading {
                sections: &[
                    ArticleSection {
                        heading: "AICPA Code of Professional Conduct",
                        body: "The AICPA Code of Professional Conduct establishes the fundamental \
                               principles that guide tax professionals:",
                        bullets: &[
                            "Integrity: Be honest and candid within the constraints of client confidentiality",
                            "Objectivity: Maintain impartiality and intellectual honesty",
                            "Professional Competence: Maintain knowledge and skill at required levels",
                            "Due Care: Act diligently and in accordance with applicable standards",
                            "Professional Behavior: Comply with relevant laws and regulations",
                        ],
                    },
                    ArticleSection {
                        heading: "IRS Circular 230 Requirements",
                        body: "Circular 230 governs practice before the IRS and establishes standards for:",
                        bullets: &[
                            "Who may practice before the IRS",
                            "Duties and restrictions relating to practice",
                            "Sanctions for violations",
                            "Rules applicable to disciplinary proceedings",
                        ],
                    },
                ],
                callout: Some((
                    "Key Takeaway",
                    "Professional ethics are legal requirements that protect both you and your \
                     clients. Violations can result in penalties, suspension, or loss of \
                     practice privileges.",
                )),
            },
        ),
        (
            "mod-2-2",
            ModuleContent::Reading {
                sections: &[
                    ArticleSection {
                        heading: "Earned Income",
                        body: "",
                        bullets: &[
                            "Wages, salaries, tips (Form W-2)",
                            "Self-employment income (Schedule C)",
                            "Partnership income (Schedule K-1)",
                        ],
                    },
                    ArticleSection {
                        heading: "Investment Income",
                        body: "",
                        bullets: &[
                            "Interest income (Form 1099-INT)",
                            "Dividend income (Form 1099-DIV)",
                            "Capital gains/losses (Form 1099-B)",
                        ],
                    },
                    ArticleSection {
                        heading: "Other Income",
                        body: "",
                        bullets: &[
                            "Retirement distributions (Form 1099-R)",
                            "Unemployment compensation (Form 1099-G)",
                            "Rental income (Schedule E)",
                            "Gambling winnings (Form W-2G)",
                        ],
                    },
                ],
                callout: Some((
                    "Pro Tip",
                    "Always verify that all income sources are reported. Missing income is one \
                     of the most common causes of IRS notices and audits.",
                )),
            },
        ),
        (
            "mod-3-3",
            ModuleContent::Reading {
                sections: &[
                    ArticleSection {
                        heading: "Child Tax Credit",
                        body: "Up to $2,000 per qualifying child under 17. Partially refundable \
                               up to $1,600. Begins phasing out at $200,000 (single) / $400,000 \
                               (married filing jointly).",
                        bullets: &[],
                    },
                    ArticleSection {
                        heading: "Earned Income Tax Credit (EITC)",
                        body: "Refundable credit for low-to-moderate income working individuals \
                               and families. Maximum credit varies by number of qualifying \
                               children and filing status.",
                        bullets: &[],
                    },
                    ArticleSection {
                        heading: "American Opportunity Tax Credit",
                        body: "Up to $2,500 per student for qualified education expenses. 40% \
                               refundable. Available for the first 4 years of post-secondary \
                               education.",
                        bullets: &[],
                    },
                ],
                callout: None,
            },
        ),
        (
            "mod-1-4",
            ModuleContent::Quiz(SampleQuestion {
                question: "Which of the following is a fundamental principle of the AICPA Code \
                           of Professional Conduct?",
                options: [
                    "Always maximize client deductions regardless of documentation",
                    "Maintain integrity and objectivity in all professional services",
                    "Charge the highest possible fees for tax preparation",
                    "Only work with high-income clients",
                ],
                tip: "Remember that professional ethics are legally binding requirements, not \
                      just suggestions.",
            }),
        ),
        (
            "mod-2-4",
            ModuleContent::Quiz(SampleQuestion {
                question: "A married couple wants to file separately. In which situation would \
                           this be most beneficial?",
                options: [
                    "When both spouses have similar high incomes",
                    "When one spouse has significant medical expenses",
                    "When they want to split their refund equally",
                    "When they file in different states",
                ],
                tip: "Consider each spouse's individual tax situation when determining optimal \
                      filing status.",
            }),
        ),
        (
            "mod-3-4",
            ModuleContent::Quiz(SampleQuestion {
                question: "A taxpayer has $8,000 in itemized deductions and the standard \
                           deduction is $13,850. What should they do?",
                options: [
                    "Take the standard deduction since it is higher",
                    "Itemize deductions to get the $8,000",
                    "Split the difference and claim $10,925",
                    "File an amended return later",
                ],
                tip: "Always choose the option that results in the lowest tax liability for the \
                      client.",
            }),
        ),
    ])
});

/// Default lesson payload for a module kind
pub fn default_content(kind: ModuleKind) -> &'static ModuleContent {
    match kind {
        ModuleKind::Video => &DEFAULT_VIDEO,
        ModuleKind::Reading => &DEFAULT_READING,
        ModuleKind::Interactive => &DEFAULT_INTERACTIVE,
        ModuleKind::Quiz => &DEFAULT_QUIZ,
    }
}

/// Lesson payload for a module.
///
/// Entries whose payload kind disagrees with the module kind are ignored.
pub fn module_content(module: &Module) -> &'static ModuleContent {
    match MODULE_CONTENT.get(module.id.as_str()) {
        Some(content) if content.kind() == module.kind => content,
        _ => default_content(module.kind),
    }
}

impl ModuleContent {
    /// Module kind this payload renders as
    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleContent::Video { .. } => ModuleKind::Video,
            ModuleContent::Reading { .. } => ModuleKind::Reading,
            ModuleContent::Interactive { .. } => ModuleKind::Interactive,
            ModuleContent::Quiz(_) => ModuleKind::Quiz,
        }
    }
}

/// Brief shown above the submission box of a homework assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkBrief {
    pub heading: &'static str,
    pub scenario: &'static [&'static str],
    pub prompt: &'static str,
    pub accepts_files: bool,
}

/// Assignment brief for a homework kind
pub fn homework_brief(kind: HomeworkKind) -> HomeworkBrief {
    match kind {
        HomeworkKind::FormPractice => HomeworkBrief {
            heading: "Tax Form Practice Exercise",
            scenario: &[
                "Scenario 1: Single Filer with W-2 Income",
                "Client: Sarah Johnson, Age 28, Single",
                "W-2 Income: $65,000",
                "Federal Tax Withheld: $8,500",
                "Student Loan Interest Paid: $2,400",
                "State Tax Withheld: $3,200",
            ],
            prompt: "Explain your approach to completing Form 1040: filing status, deductions \
                     and credits.",
            accepts_files: true,
        },
        HomeworkKind::CaseStudy => HomeworkBrief {
            heading: "Ethics Case Study Analysis",
            scenario: &[
                "Case 1: Conflicting Client Interests",
                "Case 2: Questionable Deductions",
            ],
            prompt: "Analyze the ethical considerations, cite relevant professional standards, \
                     and provide your recommended course of action.",
            accepts_files: false,
        },
        HomeworkKind::Calculation => HomeworkBrief {
            heading: "Tax Calculation Exercise",
            scenario: &[
                "Stock A: Bought 100 shares at $50 on 1/15/2023, sold 100 at $75 on 6/15/2023",
                "Stock B: Bought 200 shares at $25 on 3/1/2023, sold 50 at $30 on 11/1/2023",
                "Mutual Fund: Bought $10,000 on 2/1/2023, sold $3,000 on 12/1/2023 (FIFO)",
                "Dividends Received: $1,200 qualified dividends",
            ],
            prompt: "Show your calculations: short-term vs long-term treatment and the net \
                     capital gain or loss.",
            accepts_files: false,
        },
        HomeworkKind::Research => HomeworkBrief {
            heading: "Professional Portfolio Development",
            scenario: &[
                "Professional resume highlighting tax preparation skills",
                "Sample tax returns demonstrating various scenarios",
                "Research paper on a current tax law change",
                "Professional development plan for continuing education",
                "Client communication templates and best practices",
            ],
            prompt: "Describe your portfolio contents and reflect on your learning journey \
                     throughout this course.",
            accepts_files: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, kind: ModuleKind) -> Module {
        Module::new(id, "t", kind, "c", "1 min")
    }

    #[test]
    fn special_cased_module_gets_its_own_content() {
        let content = module_content(&module("mod-2-1", ModuleKind::Video));
        match content {
            ModuleContent::Video { highlights, .. } => {
                assert!(highlights[0].contains("Married Filing"));
            }
            other => panic!("Expected video content, got {:?}", other),
        }
    }

    #[test]
    fn unknown_module_falls_back_to_kind_default() {
        let content = module_content(&module("mod-6-3", ModuleKind::Interactive));
        assert_eq!(content, &DEFAULT_INTERACTIVE);
    }

    #[test]
    fn mismatched_kind_falls_back() {
        // mod-1-4 is a quiz in the catalog; a video with that id gets the video default
        let content = module_content(&module("mod-1-4", ModuleKind::Video));
        assert_eq!(content, &DEFAULT_VIDEO);
    }

    #[test]
    fn table_entries_match_catalog_kinds() {
        for chapter in crate::course::catalog::course_chapters() {
            for m in &chapter.modules {
                if let Some(entry) = MODULE_CONTENT.get(m.id.as_str()) {
                    assert_eq!(entry.kind(), m.kind, "kind mismatch for {}", m.id);
                }
            }
        }
    }

    #[test]
    fn briefs_exist_for_every_kind() {
        for kind in [
            HomeworkKind::FormPractice,
            HomeworkKind::CaseStudy,
            HomeworkKind::Calculation,
            HomeworkKind::Research,
        ] {
            let brief = homework_brief(kind);
            assert!(!brief.heading.is_empty());
            assert!(!brief.scenario.is_empty());
        }
    }
}
