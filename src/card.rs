//! Dataset Card
//!
//! Published facts about GUI Odyssey: where the prebuilt splits live,
//! what the dataset contains and how to cite it.

/// Hub identifier of the prebuilt train split
pub const TRAIN_HUB_ID: &str = "Voxel51/GUI-Odyssey-Train";

/// Hub identifier of the prebuilt test split
pub const TEST_HUB_ID: &str = "Voxel51/GUI-Odyssey-Test";

/// Number of episodes in the published dataset
pub const EPISODE_COUNT: usize = 7_735;

/// Action types enumerated by the dataset
pub const ACTION_TYPES: [&str; 9] = [
    "CLICK",
    "SCROLL",
    "LONG_PRESS",
    "TEXT",
    "COMPLETE",
    "IMPOSSIBLE",
    "HOME",
    "BACK",
    "RECENT",
];

/// Task categories episodes are grouped into
pub const TASK_CATEGORIES: [&str; 6] = [
    "General Tool",
    "Information Management",
    "Web Shopping",
    "Media Entertainment",
    "Social Sharing",
    "Multi-Apps",
];

pub const CITATION_BIBTEX: &str = r#"@article{lu2024gui,
  title={GUI Odyssey: A Comprehensive Dataset for Cross-App GUI Navigation on Mobile Devices},
  author={Lu, Quanfeng and Shao, Wenqi and Liu, Zitao and Meng, Fanqing and Li, Boxuan and Chen, Botong and Huang, Siyuan and Zhang, Kaipeng and Qiao, Yu and Luo, Ping},
  journal={arXiv preprint arXiv:2406.08451},
  year={2024}
}"#;

pub const CITATION_APA: &str = "Lu, Q., Shao, W., Liu, Z., Meng, F., Li, B., Chen, B., Huang, S., \
Zhang, K., Qiao, Y., & Luo, P. (2024). GUI Odyssey: A Comprehensive Dataset for Cross-App GUI \
Navigation on Mobile Devices. arXiv preprint arXiv:2406.08451.";

/// Hub identifier for a split name, if one is published
pub fn hub_id(split: &str) -> Option<&'static str> {
    match split {
        "train" => Some(TRAIN_HUB_ID),
        "test" => Some(TEST_HUB_ID),
        _ => None,
    }
}

/// Whether `label` is one of the published task categories
pub fn is_known_category(label: &str) -> bool {
    TASK_CATEGORIES.contains(&label)
}

/// Render the dataset card as plain text
pub fn render_card() -> String {
    let mut out = String::new();

    out.push_str("GUI Odyssey\n");
    out.push_str("===========\n\n");
    out.push_str("Cross-app GUI navigation episodes recorded on Android devices.\n\n");

    out.push_str("Prebuilt splits:\n");
    out.push_str(&format!("  train: {}\n", TRAIN_HUB_ID));
    out.push_str(&format!("  test:  {}\n\n", TEST_HUB_ID));

    out.push_str(&format!("Episodes: {}\n\n", EPISODE_COUNT));

    out.push_str(&format!("Action types ({}):\n", ACTION_TYPES.len()));
    for action in ACTION_TYPES {
        out.push_str(&format!("  - {}\n", action));
    }
    out.push('\n');

    out.push_str(&format!("Task categories ({}):\n", TASK_CATEGORIES.len()));
    for category in TASK_CATEGORIES {
        out.push_str(&format!("  - {}\n", category));
    }
    out.push('\n');

    out.push_str("Citation (BibTeX):\n");
    out.push_str(CITATION_BIBTEX);
    out.push_str("\n\nCitation (APA):\n");
    out.push_str(CITATION_APA);
    out.push('\n');

    out
}
