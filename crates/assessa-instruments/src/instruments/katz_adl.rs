use crate::Instrument;
use crate::scoring::{Category, ScoreBand};

/// Katz Index of Independence in Activities of Daily Living.
/// Six items, each scored 1 (independent) or 0 (dependent). Total 0–6.
pub struct KatzAdl;

impl Instrument for KatzAdl {
    fn id(&self) -> &str {
        "katz_adl"
    }

    fn name(&self) -> &str {
        "Katz ADL"
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category::new("bathing", "Bathing", "Ability to bathe oneself")
                    .option(
                        1,
                        "Independent",
                        "Bathes self completely or needs help in bathing only a single part of the body",
                    )
                    .option(
                        0,
                        "Dependent",
                        "Needs help with bathing more than one part of the body, getting in or out of the tub or shower",
                    )
                    .quick_notes(
                        1,
                        &[
                            "Patient independently completes bathing with no assistance",
                            "Demonstrates safe transfers in/out of shower",
                            "Requires setup only for bathing tasks",
                            "Uses adaptive equipment independently for bathing",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Requires moderate assistance for bathing activities",
                            "Unable to safely transfer in/out of shower without help",
                            "Needs physical assistance with upper/lower body washing",
                            "Cognitive deficits impact bathing safety and completion",
                        ],
                    ),
                Category::new("dressing", "Dressing", "Ability to dress oneself")
                    .option(
                        1,
                        "Independent",
                        "Gets clothes and dresses without any help except tying shoes",
                    )
                    .option(
                        0,
                        "Dependent",
                        "Needs help with dressing or needs to be completely dressed",
                    )
                    .quick_notes(
                        1,
                        &[
                            "Patient dresses independently with minimal time required",
                            "Successfully uses adaptive equipment for dressing",
                            "Demonstrates good problem-solving for fasteners",
                            "Completes upper and lower body dressing without assistance",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Requires assistance with upper body dressing",
                            "Unable to manage fasteners or buttons",
                            "Needs help with lower body dressing due to balance deficits",
                            "Requires verbal cues for sequencing of dressing tasks",
                        ],
                    ),
                Category::new("toileting", "Toileting", "Ability to use the toilet")
                    .option(
                        1,
                        "Independent",
                        "Goes to toilet, uses toilet, arranges clothes, and returns without any help",
                    )
                    .option(
                        0,
                        "Dependent",
                        "Needs help transferring to the toilet, cleaning self, or using bedpan/commode",
                    )
                    .quick_notes(
                        1,
                        &[
                            "Independently manages all aspects of toileting",
                            "Transfers safely to/from toilet without assistance",
                            "Manages clothing and hygiene independently",
                            "No accidents or incontinence issues noted",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Requires assistance with transfers to/from toilet",
                            "Needs help managing clothing during toileting",
                            "Occasional incontinence noted",
                            "Requires standby assistance for safety during toileting",
                        ],
                    ),
                Category::new(
                    "transferring",
                    "Transferring",
                    "Ability to move in and out of bed/chair",
                )
                .option(1, "Independent", "Moves in and out of bed or chair without help")
                .option(
                    0,
                    "Dependent",
                    "Needs help in moving from bed to chair or requires a complete transfer",
                )
                .quick_notes(
                    1,
                    &[
                        "Performs bed mobility independently",
                        "Transfers safely without assistive devices",
                        "Demonstrates good body mechanics during transfers",
                        "No fall risk noted during transfers",
                    ],
                )
                .quick_notes(
                    0,
                    &[
                        "Requires moderate assistance for bed-to-chair transfers",
                        "Uses assistive device for safe transfers",
                        "Needs verbal cuing for safe transfer techniques",
                        "Two-person assist recommended for safety",
                    ],
                ),
                Category::new("continence", "Continence", "Ability to control bladder and bowel")
                    .option(
                        1,
                        "Independent",
                        "Exercises complete self-control over urination and defecation",
                    )
                    .option(0, "Dependent", "Partially or totally incontinent of bowel or bladder")
                    .quick_notes(
                        1,
                        &[
                            "Full bladder and bowel control maintained",
                            "No incontinence episodes noted",
                            "Manages toileting schedule independently",
                            "Effectively communicates toileting needs",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Occasional incontinence episodes",
                            "Requires prompted toileting schedule",
                            "Uses incontinence products as needed",
                            "Bladder/bowel management program in place",
                        ],
                    ),
                Category::new("feeding", "Feeding", "Ability to feed oneself")
                    .option(1, "Independent", "Gets food from plate into mouth without help")
                    .option(
                        0,
                        "Dependent",
                        "Needs partial or total help with feeding or requires parenteral feeding",
                    )
                    .quick_notes(
                        1,
                        &[
                            "Feeds self all meals without assistance",
                            "Uses adaptive utensils effectively",
                            "Maintains adequate nutrition intake",
                            "No choking or swallowing concerns noted",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Requires setup and/or feeding assistance",
                            "Modified diet texture needed for safety",
                            "Needs verbal cues to complete meals",
                            "Swallowing concerns requiring close monitoring",
                        ],
                    ),
            ]
        });
        &CATEGORIES
    }

    fn bands(&self) -> &[ScoreBand] {
        static BANDS: std::sync::LazyLock<Vec<ScoreBand>> = std::sync::LazyLock::new(|| {
            vec![
                ScoreBand::new(6, "Excellent").with_description("Independent in all ADLs"),
                ScoreBand::new(4, "Good")
                    .with_description("Mostly independent with minimal assistance"),
                ScoreBand::new(2, "Moderate")
                    .with_description("Requires assistance with several ADLs"),
                ScoreBand::new(0, "Significant Impairment")
                    .with_description("Requires substantial assistance"),
            ]
        });
        &BANDS
    }
}
