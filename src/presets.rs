//! Built-in preset configurations.
//!
//! Presets are immutable starter configurations identified by exact name.
//! They are never written to the saved-configuration store and cannot be
//! deleted; their names are reserved.

use crate::models::{Attribute, AttributeLevelDescription, Configuration, LevelDescription};

/// Names of the built-in presets, in catalog order.
pub const PRESET_NAMES: [&str; 4] = [
    "Technical Capability Assessment",
    "Skills Assessment",
    "Product Features",
    "Basic Template",
];

/// Returns true if `name` exactly matches a built-in preset name.
#[must_use]
pub fn is_preset_name(name: &str) -> bool {
    PRESET_NAMES.contains(&name)
}

/// Builds the full preset catalog, in catalog order.
#[must_use]
pub fn preset_catalog() -> Vec<Configuration> {
    vec![
        technical_capability_assessment(),
        skills_assessment(),
        product_features(),
        basic_template(),
    ]
}

/// Returns the preset with the given name, if any.
#[must_use]
pub fn preset_by_name(name: &str) -> Option<Configuration> {
    preset_catalog().into_iter().find(|p| p.name == name)
}

/// The default configuration shown at startup (first preset).
#[must_use]
pub fn default_configuration() -> Configuration {
    technical_capability_assessment()
}

fn tiers(descriptions: [&str; 4]) -> Vec<AttributeLevelDescription> {
    descriptions
        .into_iter()
        .enumerate()
        .map(|(i, description)| AttributeLevelDescription {
            level: i as u32 + 1,
            description: description.to_string(),
        })
        .collect()
}

/// `Technical Capability Assessment`: ten richly described attributes on a
/// four-tier scale.
fn technical_capability_assessment() -> Configuration {
    let attributes = vec![
        Attribute::described(
            "Curiosity",
            3,
            "Is fascinated by the world around them and the way things work.",
            tiers([
                "Learns new things in time to get the work done. Tends to stick to their \
                 preferred tools, and may consider themself a \"Rails\", \"React\", or \"AWS\" \
                 engineer.",
                "Explores the capabilities of their tools to build a deep understanding of them. \
                 Always has a willingness to learn new things. Often asks \"what if?\" or \"why?\"",
                "Has explored and gained expertise in multiple tools or languages. Is fascinated \
                 by learning the ins and outs of different paradigms and models. Aims to \
                 understand the core of why we're doing things so they can find ways to improve.",
                "Has endless curiosity both in the technical space and outside of it. Has a wide \
                 breadth of knowledge across different subjects. Synthesizes and shares ideas \
                 from different spaces to bring fresh ideas to the organization.",
            ]),
        ),
        Attribute::described(
            "Quality mindset",
            2,
            "Understands procedures and best practices and is able to follow them to achieve \
             precise and correct results.",
            tiers([
                "Sometimes skips tests, or writes just enough to get coverage metrics to pass. \
                 Writes code in large patchsets that are difficult to review and are more likely \
                 to introduce defects. Would rather do things their own way than following \
                 established best practices.",
                "Writes tests to cover all the functionality of their code. Fixes bugs before \
                 moving on to the next thing. Understands the test pyramid and writes tests at \
                 appropriate levels to cover beyond the happy path.",
                "Writes tests that are both good and fast. Leaves code surrounding their changes \
                 better than they found it. Implements functional requirements that are complete \
                 and defect-free.",
                "Thinks critically about an approach to testing their code early on. Can \
                 anticipate quality problems before they manifest as bugs in code. Identifies \
                 and implements testing tools that reshape how we think about quality.",
            ]),
        ),
        Attribute::described(
            "Fearlessness",
            2,
            "Is unwilling to be intimidated by problems that have an unclear solution.",
            tiers([
                "Generally sticks to tasks they're already competent at and familiar with. \
                 Hesitates to take on tasks outside their immediate responsibility.",
                "Takes on challenges when prompted and can see them through to completion. Asks \
                 the team questions when stuck on something. Is excited to explore unfamiliar \
                 areas of the codebase.",
                "Is as good at reading code as writing it. Is unafraid of taking on tasks in new \
                 languages or tools. Actively asks questions to domain experts to find pitfalls \
                 and reduce unknowns.",
                "Has taken on large projects in areas in which they're completely unfamiliar. \
                 Jumps into complex areas of the codebase and asks the right questions to fully \
                 understand the problem. Tackles uncertainty early on in a project to prevent \
                 future surprises.",
            ]),
        ),
        Attribute::described(
            "Propensity to ship",
            3,
            "Has a desire and ability to ship code to production repeatedly and rapidly.",
            tiers([
                "Has contributed bug fixes and work towards smaller features. Hasn't yet shipped \
                 anything large or complex.",
                "Has led in their role on small projects to completion. Works effectively with \
                 product management to manage complexity and reduce scope when needed to get \
                 things released on time.",
                "Maintains some long running projects. Has led complex projects with a team to \
                 production. Can make the right trade-offs between functional and non-functional \
                 requirements based on the situation at hand.",
                "Has demonstrated they can make sound strategic decisions around how to \
                 structure work. Ships important things to customers quickly and regularly. Has \
                 been instrumental in shipping critical features and products.",
            ]),
        ),
        Attribute::described(
            "Ownership",
            2,
            "Understands the business impact of their work and is accountable for the outcomes \
             of their actions.",
            tiers([
                "Is more excited about technical challenges and tools than the impact on the \
                 business. Doesn't always think of business impact when making a choice about \
                 language or tools.",
                "Can work within the constraints of a budget. Acts on behalf of the company and \
                 doesn't say \"that's not my job.\" Can effectively learn from failures and \
                 doesn't try to hide them.",
                "Takes responsibility for their services and responds effectively to problems \
                 when they come up. Has an eye towards how their work has an impact beyond their \
                 time here. Sacrifices technical preferences for business impact.",
                "Focuses on long-term value over short-term results. Can lead effective incident \
                 management and post-mortems to make sure incidents aren't repeated. Aligns with \
                 the company goals and objectives in how they approach their work.",
            ]),
        ),
        Attribute::described(
            "Communication",
            3,
            "Can bring people together to a shared understanding, can effectively resolve \
             conflict and inspire others.",
            tiers([
                "Mostly keeps to themself, but is willing to share feedback, thoughts, and \
                 opinions when prompted.",
                "Works in public whenever they can. Is an active participant in meetings, giving \
                 valuable feedback and direction to their team. Can communicate effectively with \
                 cross-functional teammates, other teams, and management.",
                "Is receptive to feedback and makes necessary changes to grow. Helps to run \
                 meetings, keeping them on topic and useful. Encourages healthy conflict and can \
                 diffuse touchy situations.",
                "Effectively communicates objectives and helps steer the efforts of multiple \
                 teams towards a common goal. Can present a compelling vision of the future \
                 across the organization and inspire others to do their best work. Reinforces \
                 inclusivity, humanity, and growth with their communication.",
            ]),
        ),
        Attribute::described(
            "Next right thing",
            2,
            "Understands how to break down large problems to identify the next appropriate task.",
            tiers([
                "Is effective when there is a clear direction and existing examples of how to \
                 solve a particular problem. Sometimes gets stuck on large projects that aren't \
                 effectively broken down. May spin their wheels on multiple large projects at \
                 once.",
                "Can prioritize and focus on accomplishing tasks. Knows how to plan their work \
                 around time constraints. Can adequately break down work to complete it without \
                 getting overwhelmed.",
                "Knows how to devise good strategies around how to decompose problems. Is \
                 unintimidated by a blank codebase or new feature. Can build a plan of action to \
                 achieve significant goals.",
                "Can handle complex changes or difficult refactors without breaking things. Is \
                 prolific in how much they're able to get done. Prioritizes work that has the \
                 most impact.",
            ]),
        ),
        Attribute::described(
            "Support for others",
            1,
            "Shares what they learn and helps to sponsor the success of others.",
            tiers([
                "Is primarily focused on their own growth. Isn't actively mentoring anyone else, \
                 and may be looking to be mentored.",
                "Is respectful and generous towards others. Provides thoughtful and useful \
                 guidance for their colleagues. Has one or more mentees within the organization.",
                "Actively volunteers energy towards the growth of others. Has influenced the \
                 career paths of others. Can build deep trust with colleagues and gives candid \
                 and constructive feedback.",
                "Acts as a positive role model and is respected by colleagues in the \
                 organization. Their guidance and ideas have influenced others who have passed \
                 the knowledge to new generations of mentees. Has influenced long term talent \
                 growth within the organization.",
            ]),
        ),
        Attribute::described(
            "Empathic work",
            2,
            "Understands and anticipates the impact their work has on colleagues and customers.",
            tiers([
                "Is more concerned about getting the work done than what happens afterwards. Has \
                 little to no direct contact with others before or after their work is done.",
                "Understands that their work exists to support users and customers. Writes clean \
                 code with an understanding that someone else will maintain it in the future. \
                 Works effectively with product and design to make sure we're building the right \
                 thing.",
                "Makes technical decisions that are flexible to future changes. Writes good \
                 documentation to explain why we're doing things a particular way, including \
                 clear examples. Follows up on previous work to make sure it fulfills needs.",
                "Approaches all work from a perspective of the outcomes and impact it has on \
                 users. Reduces risk on projects by gathering useful information and insights to \
                 understand a problem before starting their work. Thoughtfully designs the \
                 experiences others will have when interacting with their work.",
            ]),
        ),
        Attribute::described(
            "Community",
            1,
            "Helps to organize and build communities within Instructure.",
            tiers([
                "Has little to no involvement in organizing or contributing towards community \
                 activities.",
                "Attends community activities. Is a source of positivity for those around them. \
                 Shares what they learn with their team and the wider organization.",
                "Builds culture internally at Instructure through their contributions. Regularly \
                 gives talks at events such as Avocode and Pandamonium. Is active in the \
                 Architecture Guilds or the Canvas open source community.",
                "Has an outsized impact on the company and culture. Organizes and hosts \
                 community activities and events such as Avocode, Pandamonium, the Intern \
                 Program, and others. Is Instrumental in making the company a place we all want \
                 to work.",
            ]),
        ),
    ];

    let mut config = Configuration::new("Technical Capability Assessment", attributes, 4);
    config.level_descriptions = Some(vec![
        LevelDescription {
            name: "Basic".to_string(),
            description: "Entry level - developing foundational skills and learning basic \
                          concepts."
                .to_string(),
        },
        LevelDescription {
            name: "Proficient".to_string(),
            description: "Competent - able to work independently and contribute effectively to \
                          the team."
                .to_string(),
        },
        LevelDescription {
            name: "Advanced".to_string(),
            description: "Skilled - demonstrates expertise and helps guide others in their area."
                .to_string(),
        },
        LevelDescription {
            name: "Expert".to_string(),
            description: "Mastery - recognized expert who shapes standards and mentors others."
                .to_string(),
        },
    ]);
    config
}

fn skills_assessment() -> Configuration {
    Configuration::new(
        "Skills Assessment",
        vec![
            Attribute::new("Programming", 8),
            Attribute::new("Design", 6),
            Attribute::new("Communication", 7),
            Attribute::new("Leadership", 5),
        ],
        10,
    )
}

fn product_features() -> Configuration {
    Configuration::new(
        "Product Features",
        vec![
            Attribute::new("Usability", 9),
            Attribute::new("Performance", 7),
            Attribute::new("Security", 8),
            Attribute::new("Scalability", 6),
            Attribute::new("Maintainability", 7),
        ],
        10,
    )
}

fn basic_template() -> Configuration {
    Configuration::new(
        "Basic Template",
        vec![
            Attribute::new("Attribute 1", 1),
            Attribute::new("Attribute 2", 1),
            Attribute::new("Attribute 3", 1),
        ],
        5,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_catalog_order_matches_names() {
        let catalog = preset_catalog();
        assert_eq!(catalog.len(), 4);
        for (config, name) in catalog.iter().zip(PRESET_NAMES) {
            assert_eq!(config.name, name);
        }
    }

    #[test]
    fn test_is_preset_name() {
        assert!(is_preset_name("Basic Template"));
        assert!(is_preset_name("Technical Capability Assessment"));
        assert!(!is_preset_name("basic template"));
        assert!(!is_preset_name("My Config"));
    }

    #[test]
    fn test_preset_by_name() {
        let preset = preset_by_name("Skills Assessment").unwrap();
        assert_eq!(preset.levels, 10);
        assert_eq!(preset.attributes.len(), 4);
        assert!(preset_by_name("Nope").is_none());
    }

    #[test]
    fn test_default_configuration_is_first_preset() {
        let config = default_configuration();
        assert_eq!(config.name, PRESET_NAMES[0]);
        assert_eq!(config.attributes.len(), 10);
        assert_eq!(config.levels, 4);
        assert_eq!(config.level_descriptions().len(), 4);
    }

    #[test]
    fn test_technical_preset_has_four_tiers_per_attribute() {
        let config = default_configuration();
        for attr in &config.attributes {
            let descs = attr.level_descriptions.as_ref().unwrap();
            assert_eq!(descs.len(), 4, "attribute {}", attr.name);
            for (i, desc) in descs.iter().enumerate() {
                assert_eq!(desc.level, i as u32 + 1);
                assert!(!desc.description.is_empty());
            }
        }
    }

    #[test]
    fn test_all_presets_validate_clean() {
        for preset in preset_catalog() {
            assert!(
                validate(&preset).is_empty(),
                "preset {} should be valid",
                preset.name
            );
        }
    }
}
