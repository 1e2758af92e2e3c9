use crate::Instrument;
use crate::scoring::{Category, ScoreBand};

/// Barthel Index of activities of daily living.
/// Ten weighted items in steps of 5 points. Total 0–100.
pub struct Barthel;

impl Instrument for Barthel {
    fn id(&self) -> &str {
        "barthel"
    }

    fn name(&self) -> &str {
        "Barthel Index"
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category::new("feeding", "Feeding", "Assess ability to feed oneself")
                    .option(
                        10,
                        "Independent",
                        "Able to eat any normal food (not only soft food). Food cooked and served by others but not cut up",
                    )
                    .option(5, "Needs Help", "Food cut up, but patient feeds self")
                    .option(0, "Dependent", "Unable to feed self")
                    .quick_notes(
                        10,
                        &[
                            "Patient feeds self independently with standard utensils",
                            "Demonstrates appropriate eating pace and safety",
                            "Manages all food textures without difficulty",
                            "No modifications required for independent feeding",
                        ],
                    )
                    .quick_notes(
                        5,
                        &[
                            "Requires food to be cut into bite-sized pieces",
                            "Benefits from adaptive utensils for independence",
                            "Needs set-up but completes feeding independently",
                            "Demonstrates decreased fine motor coordination affecting utensil use",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Unable to self-feed; requires total assistance",
                            "Requires mod to max assist for all feeding tasks",
                            "Patient demonstrates hand tremors preventing self-feeding",
                            "NPO status; receiving alternate nutrition",
                        ],
                    ),
                Category::new("bathing", "Bathing", "Assess ability to bathe oneself")
                    .option(
                        5,
                        "Independent",
                        "May use bath, shower or take a sponge bath. Must be able to do all steps without another person being present",
                    )
                    .option(0, "Dependent", "Needs help with bathing")
                    .quick_notes(
                        5,
                        &[
                            "Patient bathes independently including all body parts",
                            "Safely manages tub/shower transfers without assistance",
                            "Completes bathing within reasonable timeframe",
                            "Demonstrates appropriate safety awareness during bathing",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Requires mod to max assist for bathing tasks",
                            "Unable to safely transfer in/out of tub without assistance",
                            "Requires stand-by assist for safety during bathing",
                            "Patient fatigues quickly requiring frequent rest breaks",
                        ],
                    ),
                Category::new(
                    "grooming",
                    "Grooming",
                    "Assess personal hygiene (hair, teeth, face, shaving)",
                )
                .option(
                    5,
                    "Independent",
                    "Can wash hands and face, comb hair, clean teeth, and shave",
                )
                .option(0, "Dependent", "Needs help with personal care")
                .quick_notes(
                    5,
                    &[
                        "Patient completes all grooming tasks independently",
                        "Manages oral hygiene without assistance",
                        "Independently performs hair care and shaving",
                        "Demonstrates good attention to personal appearance",
                    ],
                )
                .quick_notes(
                    0,
                    &[
                        "Requires assistance with oral hygiene tasks",
                        "Unable to manage grooming tasks without verbal cues",
                        "Needs mod assist for hair care and shaving",
                        "Demonstrates decreased awareness of grooming needs",
                    ],
                ),
                Category::new("dressing", "Dressing", "Assess ability to dress and undress")
                    .option(
                        10,
                        "Independent",
                        "Able to put on, take off, and secure all clothing. Can tie shoes unless physically unable",
                    )
                    .option(5, "Needs Help", "Can do about half unaided")
                    .option(0, "Dependent", "Unable to dress self")
                    .quick_notes(
                        10,
                        &[
                            "Patient independently dons/doffs all clothing items",
                            "Manages fasteners (buttons, zippers) without difficulty",
                            "Demonstrates appropriate clothing selection",
                            "Completes dressing in reasonable timeframe",
                        ],
                    )
                    .quick_notes(
                        5,
                        &[
                            "Requires assistance with lower body dressing only",
                            "Needs help with fasteners but manages other tasks",
                            "Benefits from adaptive equipment for partial independence",
                            "Able to dress upper extremities independently",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Requires max assist for all dressing tasks",
                            "Unable to sequence dressing activities",
                            "Demonstrates poor balance affecting dressing safety",
                            "Needs total assistance due to decreased ROM and strength",
                        ],
                    ),
                Category::new("bowels", "Bowel Control", "Assess bowel continence")
                    .option(
                        10,
                        "Continent",
                        "No accidents. Able to use suppository/enema if needed",
                    )
                    .option(
                        5,
                        "Occasional Accident",
                        "Less than once per week or needs help with suppository/enema",
                    )
                    .option(0, "Incontinent", "Frequent accidents")
                    .quick_notes(
                        10,
                        &[
                            "Patient maintains full bowel control",
                            "Independently manages bowel routine",
                            "No accidents reported during assessment period",
                            "Demonstrates appropriate awareness of bowel needs",
                        ],
                    )
                    .quick_notes(
                        5,
                        &[
                            "Occasional accidents noted (less than weekly)",
                            "Requires assistance with suppository management",
                            "Benefits from scheduled bowel program",
                            "Demonstrates improved awareness with reminders",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Frequent bowel accidents requiring management",
                            "Unable to maintain bowel control",
                            "Requires complete bowel care program",
                            "Demonstrates decreased awareness of bowel needs",
                        ],
                    ),
                Category::new("bladder", "Bladder Control", "Assess bladder continence")
                    .option(
                        10,
                        "Continent",
                        "No accidents. Able to use any aids (catheter) if needed",
                    )
                    .option(
                        5,
                        "Occasional Accident",
                        "Less than once per day or needs help with catheter",
                    )
                    .option(0, "Incontinent", "Frequent accidents or catheter and unable to manage")
                    .quick_notes(
                        10,
                        &[
                            "Patient maintains full bladder control",
                            "Independently manages catheter care if applicable",
                            "No incontinence episodes reported",
                            "Follows toileting schedule independently",
                        ],
                    )
                    .quick_notes(
                        5,
                        &[
                            "Occasional urinary accidents (less than daily)",
                            "Requires assistance with catheter management",
                            "Benefits from prompted toileting schedule",
                            "Demonstrates urge incontinence with some awareness",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Frequent urinary incontinence requiring management",
                            "Has indwelling catheter requiring total assistance",
                            "Unable to maintain bladder control",
                            "Requires complete continence care program",
                        ],
                    ),
                Category::new("toiletUse", "Toilet Use", "Assess ability to use toilet")
                    .option(
                        10,
                        "Independent",
                        "Able to get on/off, arrange clothes, clean self, and flush",
                    )
                    .option(5, "Needs Help", "Needs help but can do some things alone")
                    .option(0, "Dependent", "Unable to use toilet")
                    .quick_notes(
                        10,
                        &[
                            "Patient manages all toileting tasks independently",
                            "Safely transfers on/off toilet without assistance",
                            "Completes hygiene management appropriately",
                            "Maintains safety awareness during toileting",
                        ],
                    )
                    .quick_notes(
                        5,
                        &[
                            "Requires assistance with clothing management",
                            "Needs help with transfers but manages hygiene",
                            "Benefits from grab bars for safe transfers",
                            "Requires stand-by assist for safety",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Unable to transfer to toilet without max assist",
                            "Requires complete assistance with all toileting tasks",
                            "Uses bedside commode with total assistance",
                            "Unable to manage hygiene without help",
                        ],
                    ),
                Category::new("transfers", "Transfers (Bed to Chair)", "Assess ability to transfer")
                    .option(15, "Independent", "No help needed including locking wheelchair")
                    .option(10, "Minor Help", "Minimal assistance or supervision")
                    .option(5, "Major Help", "Able to sit but needs max assistance to transfer")
                    .option(0, "Unable", "No sitting balance; mechanical lift required")
                    .quick_notes(
                        15,
                        &[
                            "Patient transfers independently to all surfaces",
                            "Demonstrates safe transfer technique throughout",
                            "Locks wheelchair and manages footrests appropriately",
                            "Maintains excellent trunk control during transfers",
                        ],
                    )
                    .quick_notes(
                        10,
                        &[
                            "Requires minimal verbal cues for safe transfers",
                            "Needs contact guard assist for safety",
                            "Demonstrates mostly independent transfer ability",
                            "Benefits from transfer equipment but otherwise independent",
                        ],
                    )
                    .quick_notes(
                        5,
                        &[
                            "Requires mod to max assist for transfers",
                            "Able to sit but unable to stand without significant help",
                            "Demonstrates poor weight-bearing ability",
                            "Requires two-person assist for safe transfers",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "No sitting balance; unable to assist with transfers",
                            "Requires mechanical lift for all transfers",
                            "Total dependence for transfer activities",
                            "Unable to weight bear at all",
                        ],
                    ),
                Category::new(
                    "mobility",
                    "Mobility (Walking)",
                    "Assess walking ability on level surface",
                )
                .option(
                    15,
                    "Independent",
                    "Can walk 50 yards without help. May use aids except walking frame",
                )
                .option(10, "Walks with Help", "Can walk 50 yards with help or supervision")
                .option(
                    5,
                    "Wheelchair Independent",
                    "If unable to walk, can propel wheelchair 50 yards independently",
                )
                .option(0, "Immobile", "Unable to walk or propel wheelchair")
                .quick_notes(
                    15,
                    &[
                        "Patient ambulates independently on level surfaces",
                        "Walks greater than 50 yards without assistance",
                        "Uses appropriate assistive device safely",
                        "Demonstrates good endurance for mobility tasks",
                    ],
                )
                .quick_notes(
                    10,
                    &[
                        "Requires supervision for safe ambulation",
                        "Needs contact guard assist for 50 yard distance",
                        "Demonstrates fair endurance requiring rest breaks",
                        "Benefits from assistive device with minimal help",
                    ],
                )
                .quick_notes(
                    5,
                    &[
                        "Independently propels wheelchair 50+ yards",
                        "Manages wheelchair mobility on level surfaces",
                        "Demonstrates good wheelchair safety awareness",
                        "Unable to ambulate but independent in wheelchair",
                    ],
                )
                .quick_notes(
                    0,
                    &[
                        "Unable to ambulate or propel wheelchair",
                        "Requires total assistance for all mobility",
                        "No functional mobility without max assist",
                        "Dependent for all mobility needs",
                    ],
                ),
                Category::new("stairs", "Stairs", "Assess ability to climb stairs")
                    .option(
                        10,
                        "Independent",
                        "Can go up and down stairs safely without help. May use aids",
                    )
                    .option(5, "Needs Help", "Needs help or supervision for safety")
                    .option(0, "Unable", "Unable to use stairs")
                    .quick_notes(
                        10,
                        &[
                            "Patient navigates stairs independently and safely",
                            "Ascends/descends full flight without assistance",
                            "Uses handrail appropriately for safety",
                            "Demonstrates good balance and endurance on stairs",
                        ],
                    )
                    .quick_notes(
                        5,
                        &[
                            "Requires contact guard assist for stair safety",
                            "Needs supervision ascending/descending stairs",
                            "Demonstrates fair balance requiring stand-by assist",
                            "Benefits from handrail with minimal help",
                        ],
                    )
                    .quick_notes(
                        0,
                        &[
                            "Unable to navigate stairs safely",
                            "Requires max assist for any stair climbing",
                            "Demonstrates poor balance precluding stair use",
                            "Not appropriate for stairs at this time",
                        ],
                    ),
            ]
        });
        &CATEGORIES
    }

    fn bands(&self) -> &[ScoreBand] {
        static BANDS: std::sync::LazyLock<Vec<ScoreBand>> = std::sync::LazyLock::new(|| {
            vec![
                ScoreBand::new(90, "Independent - minimal assistance needed"),
                ScoreBand::new(60, "Mild dependence - requires some assistance"),
                ScoreBand::new(40, "Moderate dependence - requires significant assistance"),
                ScoreBand::new(20, "Severe dependence - requires extensive assistance"),
                ScoreBand::new(0, "Total dependence - requires help with all activities"),
            ]
        });
        &BANDS
    }
}
