use dioxus::prelude::*;

use crate::components::icons::AwardIcon;
use crate::stores::profile_store::Skill;

/// Partition skills into grid rows of two, preserving order. An odd tail
/// renders alone; the second slot stays blank rather than reflowing.
pub fn skill_rows(skills: &[Skill]) -> Vec<(Skill, Option<Skill>)> {
    skills
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair.get(1).cloned()))
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct SkillsGridProps {
    pub skills: Vec<Skill>,
}

#[component]
pub fn SkillsGrid(props: SkillsGridProps) -> Element {
    rsx! {
        div {
            class: "w-full bg-white/95 rounded-[20px] shadow-lg p-6",

            // Section heading
            div {
                class: "flex items-center gap-3 mb-5",
                AwardIcon { class: "w-6 h-6 text-[#667eea]".to_string() }
                h2 {
                    class: "text-xl font-bold text-[#2c3e50]",
                    "Skills"
                }
            }

            div {
                class: "space-y-3",
                for (first, second) in skill_rows(&props.skills) {
                    div {
                        class: "flex gap-3",
                        SkillBadge { skill: first }
                        if let Some(skill) = second {
                            SkillBadge { skill }
                        } else {
                            div { class: "flex-1" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SkillBadgeProps {
    pub skill: Skill,
}

#[component]
pub fn SkillBadge(props: SkillBadgeProps) -> Element {
    rsx! {
        div {
            class: "flex-1 flex items-center justify-center gap-2 px-4 py-3 rounded-2xl bg-[#667eea]/10 border border-[#667eea]/30",
            span {
                class: "text-base",
                "{props.skill.emoji}"
            }
            span {
                class: "text-[13px] font-medium text-[#2c3e50] text-center",
                "{props.skill.name}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::profile_store::sample_profile;

    fn skills(n: usize) -> Vec<Skill> {
        (0..n)
            .map(|i| Skill::new(&format!("Skill {}", i), "🔧"))
            .collect()
    }

    #[test]
    fn test_even_count_fills_every_slot() {
        let rows = skill_rows(&skills(6));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|(_, second)| second.is_some()));
    }

    #[test]
    fn test_odd_count_leaves_last_slot_blank() {
        let rows = skill_rows(&skills(5));
        assert_eq!(rows.len(), 3);
        assert!(rows[0].1.is_some());
        assert!(rows[1].1.is_some());
        assert!(rows[2].1.is_none());
    }

    #[test]
    fn test_row_count_is_ceil_of_half() {
        for n in 0..10 {
            let rows = skill_rows(&skills(n));
            assert_eq!(rows.len(), n.div_ceil(2), "wrong row count for {} skills", n);
        }
    }

    #[test]
    fn test_single_skill_renders_one_half_row() {
        let rows = skill_rows(&skills(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.name, "Skill 0");
        assert!(rows[0].1.is_none());
    }

    #[test]
    fn test_rows_preserve_insertion_order() {
        let rows = skill_rows(&skills(4));
        assert_eq!(rows[0].0.name, "Skill 0");
        assert_eq!(rows[0].1.as_ref().unwrap().name, "Skill 1");
        assert_eq!(rows[1].0.name, "Skill 2");
        assert_eq!(rows[1].1.as_ref().unwrap().name, "Skill 3");
    }

    #[test]
    fn test_sample_profile_fills_three_rows() {
        let rows = skill_rows(&sample_profile().skills);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|(_, second)| second.is_some()));
    }
}
