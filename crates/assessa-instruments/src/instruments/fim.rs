use crate::Instrument;
use crate::scoring::{Category, Composite, ScoreBand};

/// FIM: Functional Independence Measure.
/// 18 items across five sections, each rated 1 (total assist) to 7
/// (complete independence). Total 18–126; motor 13–91, cognitive 5–35.
pub struct Fim;

impl Instrument for Fim {
    fn id(&self) -> &str {
        "fim"
    }

    fn name(&self) -> &str {
        "FIM"
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category::new(
                    "eating",
                    "Eating",
                    "Includes use of suitable utensils to bring food to mouth, chewing and swallowing",
                )
                .in_section("Self-Care")
                .option(
                    7,
                    "Complete Independence",
                    "Patient eats from a dish, managing all consistencies independently",
                )
                .option(
                    6,
                    "Modified Independence",
                    "Requires adaptive device, extra time, or safety considerations",
                )
                .option(5, "Supervision", "Requires cueing or supervision only")
                .option(4, "Minimal Assist", "Patient performs 75% or more of eating tasks")
                .option(3, "Moderate Assist", "Patient performs 50-74% of eating tasks")
                .option(2, "Maximal Assist", "Patient performs 25-49% of eating tasks")
                .option(1, "Total Assist", "Patient performs less than 25% of eating tasks")
                .quick_notes(
                    7,
                    &[
                        "Patient eats independently with standard utensils",
                        "No modifications or assistance required",
                    ],
                )
                .quick_notes(
                    6,
                    &[
                        "Uses adaptive utensils but feeds self completely",
                        "Requires extra time but completes independently",
                    ],
                )
                .quick_notes(
                    5,
                    &[
                        "Needs verbal cues for safe swallowing",
                        "Requires supervision for pacing",
                    ],
                )
                .quick_notes(
                    4,
                    &[
                        "Requires minimal assistance with cutting food",
                        "Needs help with container opening",
                    ],
                )
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for feeding tasks",
                        "Patient assists but needs frequent help",
                    ],
                )
                .quick_notes(
                    2,
                    &[
                        "Requires max assist for most feeding tasks",
                        "Patient participates minimally",
                    ],
                )
                .quick_notes(
                    1,
                    &[
                        "Total assist required for all feeding",
                        "Unable to self-feed",
                    ],
                ),
                Category::new(
                    "grooming",
                    "Grooming",
                    "Oral care, hair grooming, washing hands and face, shaving or makeup",
                )
                .in_section("Self-Care")
                .option(
                    7,
                    "Complete Independence",
                    "Completes all grooming tasks independently",
                )
                .option(6, "Modified Independence", "Requires adaptive device or extra time")
                .option(5, "Supervision", "Requires cueing or supervision only")
                .option(4, "Minimal Assist", "Patient performs 75% or more of grooming")
                .option(3, "Moderate Assist", "Patient performs 50-74% of grooming")
                .option(2, "Maximal Assist", "Patient performs 25-49% of grooming")
                .option(1, "Total Assist", "Patient performs less than 25% of grooming")
                .quick_notes(
                    7,
                    &[
                        "Completes all grooming independently",
                        "Maintains good personal hygiene",
                    ],
                )
                .quick_notes(
                    6,
                    &[
                        "Uses adaptive equipment for independence",
                        "Requires extended time but completes tasks",
                    ],
                )
                .quick_notes(
                    5,
                    &[
                        "Needs reminders to complete grooming",
                        "Requires supervision for safety",
                    ],
                )
                .quick_notes(
                    4,
                    &[
                        "Needs minimal help with hair care",
                        "Requires setup but completes most tasks",
                    ],
                )
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for oral care",
                        "Completes about half of grooming tasks",
                    ],
                )
                .quick_notes(
                    2,
                    &[
                        "Requires max assist for grooming",
                        "Limited participation in tasks",
                    ],
                )
                .quick_notes(1, &["Total dependence for all grooming", "Unable to participate"]),
                Category::new(
                    "bathing",
                    "Bathing",
                    "Washing, rinsing, and drying the body from neck down (excludes back)",
                )
                .in_section("Self-Care")
                .option(
                    7,
                    "Complete Independence",
                    "Bathes independently including getting in/out of tub or shower",
                )
                .option(6, "Modified Independence", "Requires equipment or extra time")
                .option(5, "Supervision", "Requires supervision for safety")
                .option(4, "Minimal Assist", "Patient performs 75% or more of bathing")
                .option(3, "Moderate Assist", "Patient performs 50-74% of bathing")
                .option(2, "Maximal Assist", "Patient performs 25-49% of bathing")
                .option(1, "Total Assist", "Patient performs less than 25% of bathing")
                .quick_notes(
                    7,
                    &[
                        "Bathes all body parts independently",
                        "Safe tub/shower transfers",
                    ],
                )
                .quick_notes(
                    6,
                    &[
                        "Uses shower chair or grab bars",
                        "Requires extra time but independent",
                    ],
                )
                .quick_notes(
                    5,
                    &[
                        "Needs stand-by assist for safety",
                        "Requires supervision during bathing",
                    ],
                )
                .quick_notes(
                    4,
                    &[
                        "Needs help with back only",
                        "Completes most bathing independently",
                    ],
                )
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for bathing",
                        "Washes front of body only",
                    ],
                )
                .quick_notes(2, &["Requires max assist for bathing", "Minimal participation"])
                .quick_notes(1, &["Total assist for all bathing", "Unable to participate"]),
                Category::new(
                    "dressingUpper",
                    "Dressing - Upper Body",
                    "Dressing above the waist, including orthotics",
                )
                .in_section("Self-Care")
                .option(
                    7,
                    "Complete Independence",
                    "Dresses upper body completely independently",
                )
                .option(6, "Modified Independence", "Requires adaptive clothing or devices")
                .option(5, "Supervision", "Requires cueing or supervision")
                .option(4, "Minimal Assist", "Patient performs 75% or more")
                .option(3, "Moderate Assist", "Patient performs 50-74%")
                .option(2, "Maximal Assist", "Patient performs 25-49%")
                .option(1, "Total Assist", "Patient performs less than 25%")
                .quick_notes(
                    7,
                    &[
                        "Dons/doffs all UE clothing independently",
                        "Manages all fasteners",
                    ],
                )
                .quick_notes(
                    6,
                    &[
                        "Uses button hook or adapted clothing",
                        "Independent with modifications",
                    ],
                )
                .quick_notes(5, &["Needs verbal cues for sequencing", "Requires supervision"])
                .quick_notes(
                    4,
                    &[
                        "Needs minimal help with fasteners",
                        "Completes most dressing",
                    ],
                )
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for UE dressing",
                        "Completes about half",
                    ],
                )
                .quick_notes(
                    2,
                    &[
                        "Requires max assist for UE dressing",
                        "Limited participation",
                    ],
                )
                .quick_notes(1, &["Total assist for UE dressing", "Unable to participate"]),
                Category::new(
                    "dressingLower",
                    "Dressing - Lower Body",
                    "Dressing below the waist, including orthotics and shoes",
                )
                .in_section("Self-Care")
                .option(
                    7,
                    "Complete Independence",
                    "Dresses lower body completely independently",
                )
                .option(6, "Modified Independence", "Requires adaptive equipment")
                .option(5, "Supervision", "Requires cueing or supervision")
                .option(4, "Minimal Assist", "Patient performs 75% or more")
                .option(3, "Moderate Assist", "Patient performs 50-74%")
                .option(2, "Maximal Assist", "Patient performs 25-49%")
                .option(1, "Total Assist", "Patient performs less than 25%")
                .quick_notes(
                    7,
                    &[
                        "Dons/doffs all LE clothing independently",
                        "Puts on shoes/socks independently",
                    ],
                )
                .quick_notes(
                    6,
                    &[
                        "Uses sock aid and reacher",
                        "Independent with adaptive equipment",
                    ],
                )
                .quick_notes(
                    5,
                    &[
                        "Needs verbal cues for balance",
                        "Requires supervision for safety",
                    ],
                )
                .quick_notes(
                    4,
                    &[
                        "Needs minimal help with shoes",
                        "Completes most LE dressing",
                    ],
                )
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for LE dressing",
                        "Assists with about half",
                    ],
                )
                .quick_notes(
                    2,
                    &[
                        "Requires max assist for LE dressing",
                        "Limited participation",
                    ],
                )
                .quick_notes(1, &["Total assist for LE dressing", "Unable to participate"]),
                Category::new(
                    "toileting",
                    "Toileting",
                    "Perineal hygiene and adjusting clothing before/after toilet use",
                )
                .in_section("Self-Care")
                .option(
                    7,
                    "Complete Independence",
                    "Manages all aspects of toileting independently",
                )
                .option(6, "Modified Independence", "Requires equipment or extra time")
                .option(5, "Supervision", "Requires supervision for safety")
                .option(4, "Minimal Assist", "Patient performs 75% or more")
                .option(3, "Moderate Assist", "Patient performs 50-74%")
                .option(2, "Maximal Assist", "Patient performs 25-49%")
                .option(1, "Total Assist", "Patient performs less than 25%")
                .quick_notes(
                    7,
                    &[
                        "Manages all toileting tasks independently",
                        "Completes hygiene appropriately",
                    ],
                )
                .quick_notes(
                    6,
                    &[
                        "Uses raised toilet seat or grab bars",
                        "Independent with equipment",
                    ],
                )
                .quick_notes(5, &["Needs supervision for safety", "Requires verbal cues"])
                .quick_notes(4, &["Needs minimal help with clothing", "Completes most tasks"])
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for toileting",
                        "Assists with about half",
                    ],
                )
                .quick_notes(2, &["Requires max assist for toileting", "Limited participation"])
                .quick_notes(1, &["Total assist for toileting", "Unable to participate"]),
                Category::new(
                    "bladder",
                    "Bladder Management",
                    "Complete control and ability to maintain perineal hygiene",
                )
                .in_section("Sphincter Control")
                .option(7, "Complete Independence", "Complete bladder control, no accidents")
                .option(
                    6,
                    "Modified Independence",
                    "Uses device independently (catheter, etc.)",
                )
                .option(5, "Supervision", "Requires supervision or reminders")
                .option(4, "Minimal Assist", "Infrequent accidents (less than once/day)")
                .option(3, "Moderate Assist", "Occasional accidents (once/day)")
                .option(2, "Maximal Assist", "Frequent accidents (more than once/day)")
                .option(1, "Total Assist", "No control or indwelling catheter")
                .quick_notes(7, &["Complete bladder control", "No accidents reported"])
                .quick_notes(6, &["Manages catheter independently", "No assistance needed"])
                .quick_notes(
                    5,
                    &[
                        "Needs reminders for toileting",
                        "Rare accidents with prompts",
                    ],
                )
                .quick_notes(4, &["Infrequent accidents noted", "Mostly continent"])
                .quick_notes(3, &["Occasional accidents daily", "Partial control"])
                .quick_notes(2, &["Frequent accidents", "Poor bladder control"])
                .quick_notes(
                    1,
                    &[
                        "Complete incontinence",
                        "Indwelling catheter with assistance",
                    ],
                ),
                Category::new(
                    "bowel",
                    "Bowel Management",
                    "Complete control and ability to maintain perineal hygiene",
                )
                .in_section("Sphincter Control")
                .option(7, "Complete Independence", "Complete bowel control, no accidents")
                .option(6, "Modified Independence", "Uses suppository independently")
                .option(5, "Supervision", "Requires supervision or reminders")
                .option(4, "Minimal Assist", "Infrequent accidents (less than once/week)")
                .option(3, "Moderate Assist", "Occasional accidents (once/week)")
                .option(2, "Maximal Assist", "Frequent accidents (more than once/week)")
                .option(1, "Total Assist", "No control or requires enemas")
                .quick_notes(7, &["Complete bowel control", "No accidents reported"])
                .quick_notes(
                    6,
                    &[
                        "Manages bowel program independently",
                        "No assistance needed",
                    ],
                )
                .quick_notes(
                    5,
                    &[
                        "Needs reminders for bowel routine",
                        "Rare accidents with prompts",
                    ],
                )
                .quick_notes(4, &["Infrequent accidents noted", "Mostly continent"])
                .quick_notes(3, &["Occasional accidents weekly", "Partial control"])
                .quick_notes(2, &["Frequent accidents", "Poor bowel control"])
                .quick_notes(1, &["Complete incontinence", "Requires total bowel management"]),
                Category::new(
                    "transfers",
                    "Bed/Chair/Wheelchair Transfer",
                    "Moving to and from bed, chair, wheelchair; includes coming to standing position",
                )
                .in_section("Mobility")
                .option(7, "Complete Independence", "Transfers safely in all situations")
                .option(6, "Modified Independence", "Uses assistive device for transfers")
                .option(5, "Supervision", "Requires supervision or cueing")
                .option(4, "Minimal Assist", "Performs 75% or more of transfer")
                .option(3, "Moderate Assist", "Performs 50-74% of transfer")
                .option(2, "Maximal Assist", "Performs 25-49% of transfer")
                .option(1, "Total Assist", "Performs less than 25% or uses lift")
                .quick_notes(
                    7,
                    &[
                        "Transfers independently all surfaces",
                        "No equipment needed",
                    ],
                )
                .quick_notes(6, &["Uses grab bar or walker", "Independent with device"])
                .quick_notes(5, &["Needs contact guard for safety", "Requires supervision"])
                .quick_notes(4, &["Needs minimal assist to stand", "Mostly independent"])
                .quick_notes(3, &["Requires mod assist for transfers", "Assists about half"])
                .quick_notes(
                    2,
                    &[
                        "Requires max assist for transfers",
                        "Limited weight bearing",
                    ],
                )
                .quick_notes(1, &["Total assist or mechanical lift", "Unable to assist"]),
                Category::new("toilet", "Toilet Transfer", "Getting on and off toilet")
                    .in_section("Mobility")
                    .option(7, "Complete Independence", "Transfers safely and independently")
                    .option(6, "Modified Independence", "Uses grab bars or raised seat")
                    .option(5, "Supervision", "Requires supervision for safety")
                    .option(4, "Minimal Assist", "Performs 75% or more")
                    .option(3, "Moderate Assist", "Performs 50-74%")
                    .option(2, "Maximal Assist", "Performs 25-49%")
                    .option(1, "Total Assist", "Performs less than 25%")
                    .quick_notes(7, &["Toilet transfers independently", "No equipment needed"])
                    .quick_notes(6, &["Uses grab bars for safety", "Independent with equipment"])
                    .quick_notes(5, &["Needs stand-by assist", "Requires supervision"])
                    .quick_notes(4, &["Needs minimal assist on/off toilet", "Mostly independent"])
                    .quick_notes(
                        3,
                        &[
                            "Requires mod assist for toilet transfers",
                            "Assists about half",
                        ],
                    )
                    .quick_notes(
                        2,
                        &[
                            "Requires max assist for toilet transfers",
                            "Limited assistance provided",
                        ],
                    )
                    .quick_notes(1, &["Total assist for toilet transfers", "Unable to assist"]),
                Category::new(
                    "shower",
                    "Tub/Shower Transfer",
                    "Getting in and out of tub or shower",
                )
                .in_section("Mobility")
                .option(7, "Complete Independence", "Transfers safely and independently")
                .option(6, "Modified Independence", "Uses shower chair or grab bars")
                .option(5, "Supervision", "Requires supervision for safety")
                .option(4, "Minimal Assist", "Performs 75% or more")
                .option(3, "Moderate Assist", "Performs 50-74%")
                .option(2, "Maximal Assist", "Performs 25-49%")
                .option(1, "Total Assist", "Performs less than 25%")
                .quick_notes(7, &["Tub/shower transfers independently", "No equipment needed"])
                .quick_notes(
                    6,
                    &[
                        "Uses shower chair and grab bars",
                        "Independent with equipment",
                    ],
                )
                .quick_notes(5, &["Needs stand-by assist for safety", "Requires supervision"])
                .quick_notes(4, &["Needs minimal assist in/out", "Mostly independent"])
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for shower transfers",
                        "Assists about half",
                    ],
                )
                .quick_notes(
                    2,
                    &[
                        "Requires max assist for shower transfers",
                        "Limited assistance",
                    ],
                )
                .quick_notes(1, &["Total assist for shower transfers", "Unable to assist"]),
                Category::new(
                    "locomotion",
                    "Locomotion",
                    "Walking or wheelchair propulsion for 150 feet",
                )
                .in_section("Mobility")
                .option(7, "Complete Independence", "Walks 150+ feet independently")
                .option(6, "Modified Independence", "Uses assistive device but independent")
                .option(5, "Supervision", "Requires supervision for safety")
                .option(4, "Minimal Assist", "Performs 75% or more of distance")
                .option(3, "Moderate Assist", "Performs 50-74% of distance")
                .option(2, "Maximal Assist", "Performs 25-49% of distance")
                .option(1, "Total Assist", "Performs less than 25% or pushed in w/c")
                .quick_notes(
                    7,
                    &[
                        "Ambulates 150+ feet independently",
                        "No assistive device needed",
                    ],
                )
                .quick_notes(6, &["Uses walker/cane independently", "Walks with device safely"])
                .quick_notes(5, &["Needs contact guard for ambulation", "Requires supervision"])
                .quick_notes(4, &["Needs minimal assist for distance", "Mostly independent"])
                .quick_notes(
                    3,
                    &[
                        "Requires mod assist for ambulation",
                        "Completes partial distance",
                    ],
                )
                .quick_notes(
                    2,
                    &[
                        "Requires max assist for ambulation",
                        "Very limited distance",
                    ],
                )
                .quick_notes(1, &["Unable to ambulate", "Pushed in wheelchair"]),
                Category::new("stairs", "Stairs", "Going up and down 12-14 stairs")
                    .in_section("Mobility")
                    .option(7, "Complete Independence", "Climbs stairs safely and independently")
                    .option(6, "Modified Independence", "Uses assistive device or railing")
                    .option(5, "Supervision", "Requires supervision for safety")
                    .option(4, "Minimal Assist", "Performs 75% or more")
                    .option(3, "Moderate Assist", "Performs 50-74%")
                    .option(2, "Maximal Assist", "Performs 25-49%")
                    .option(1, "Total Assist", "Unable to climb stairs")
                    .quick_notes(7, &["Climbs stairs independently", "No equipment needed"])
                    .quick_notes(6, &["Uses handrail for safety", "Independent with railing"])
                    .quick_notes(5, &["Needs contact guard on stairs", "Requires supervision"])
                    .quick_notes(4, &["Needs minimal assist on stairs", "Mostly independent"])
                    .quick_notes(3, &["Requires mod assist for stairs", "Completes with help"])
                    .quick_notes(2, &["Requires max assist for stairs", "Very limited ability"])
                    .quick_notes(1, &["Unable to use stairs", "Not safe for stairs"]),
                Category::new(
                    "comprehension",
                    "Comprehension",
                    "Understanding of verbal or gestural communication",
                )
                .in_section("Communication")
                .option(7, "Complete Independence", "Understands complex conversations")
                .option(6, "Modified Independence", "Understands with extra time or repetition")
                .option(5, "Supervision", "Requires prompting 10% of time")
                .option(4, "Minimal Assist", "Requires prompting 10-25% of time")
                .option(3, "Moderate Assist", "Requires prompting 25-50% of time")
                .option(2, "Maximal Assist", "Requires prompting 50-75% of time")
                .option(1, "Total Assist", "Understands less than 25% of communication")
                .quick_notes(
                    7,
                    &[
                        "Comprehends all communication",
                        "No difficulty understanding",
                    ],
                )
                .quick_notes(
                    6,
                    &[
                        "Needs extra time or repetition",
                        "Generally comprehends well",
                    ],
                )
                .quick_notes(5, &["Needs occasional clarification", "Mostly understands"])
                .quick_notes(
                    4,
                    &[
                        "Needs frequent clarification",
                        "Some comprehension deficits",
                    ],
                )
                .quick_notes(3, &["Moderate comprehension deficits", "Needs significant help"])
                .quick_notes(
                    2,
                    &[
                        "Severe comprehension deficits",
                        "Very limited understanding",
                    ],
                )
                .quick_notes(
                    1,
                    &[
                        "Minimal comprehension",
                        "Does not understand most communication",
                    ],
                ),
                Category::new("expression", "Expression", "Vocal or gestural expression")
                    .in_section("Communication")
                    .option(7, "Complete Independence", "Expresses complex ideas clearly")
                    .option(6, "Modified Independence", "Expresses with extra time or device")
                    .option(5, "Supervision", "Requires prompting 10% of time")
                    .option(4, "Minimal Assist", "Requires prompting 10-25% of time")
                    .option(3, "Moderate Assist", "Requires prompting 25-50% of time")
                    .option(2, "Maximal Assist", "Requires prompting 50-75% of time")
                    .option(1, "Total Assist", "Expresses less than 25% of needs")
                    .quick_notes(7, &["Expresses all needs clearly", "No communication difficulty"])
                    .quick_notes(
                        6,
                        &[
                            "Uses communication device effectively",
                            "Expresses needs with modifications",
                        ],
                    )
                    .quick_notes(5, &["Needs occasional prompting", "Generally communicates well"])
                    .quick_notes(4, &["Needs frequent prompting", "Some expression deficits"])
                    .quick_notes(3, &["Moderate expression deficits", "Needs significant help"])
                    .quick_notes(2, &["Severe expression deficits", "Very limited communication"])
                    .quick_notes(1, &["Minimal expression", "Cannot communicate most needs"]),
                Category::new(
                    "socialInteraction",
                    "Social Interaction",
                    "Skills related to getting along with others",
                )
                .in_section("Social Cognition")
                .option(7, "Complete Independence", "Interacts appropriately in all situations")
                .option(6, "Modified Independence", "Interacts appropriately with extra time")
                .option(5, "Supervision", "Requires prompting 10% of time")
                .option(4, "Minimal Assist", "Requires prompting 10-25% of time")
                .option(3, "Moderate Assist", "Requires prompting 25-50% of time")
                .option(2, "Maximal Assist", "Requires prompting 50-75% of time")
                .option(1, "Total Assist", "Inappropriate behavior more than 75% of time")
                .quick_notes(7, &["Appropriate social interactions", "No behavioral concerns"])
                .quick_notes(6, &["Generally appropriate", "Needs extra processing time"])
                .quick_notes(5, &["Needs occasional redirection", "Mostly appropriate"])
                .quick_notes(4, &["Needs frequent redirection", "Some social deficits"])
                .quick_notes(3, &["Moderate social deficits", "Needs significant guidance"])
                .quick_notes(2, &["Severe social deficits", "Frequent inappropriate behavior"])
                .quick_notes(1, &["Very poor social interaction", "Constantly inappropriate"]),
                Category::new(
                    "problemSolving",
                    "Problem Solving",
                    "Skills related to solving problems of daily living",
                )
                .in_section("Social Cognition")
                .option(7, "Complete Independence", "Solves problems independently")
                .option(6, "Modified Independence", "Solves with extra time or strategies")
                .option(5, "Supervision", "Requires prompting 10% of time")
                .option(4, "Minimal Assist", "Requires prompting 10-25% of time")
                .option(3, "Moderate Assist", "Requires prompting 25-50% of time")
                .option(2, "Maximal Assist", "Requires prompting 50-75% of time")
                .option(1, "Total Assist", "Unable to solve problems more than 75% of time")
                .quick_notes(
                    7,
                    &[
                        "Solves daily problems independently",
                        "Good problem-solving skills",
                    ],
                )
                .quick_notes(6, &["Solves problems with extra time", "Generally effective"])
                .quick_notes(5, &["Needs occasional assistance", "Mostly independent"])
                .quick_notes(4, &["Needs frequent assistance", "Some problem-solving deficits"])
                .quick_notes(
                    3,
                    &[
                        "Moderate problem-solving deficits",
                        "Needs significant help",
                    ],
                )
                .quick_notes(2, &["Severe problem-solving deficits", "Very limited ability"])
                .quick_notes(1, &["Unable to problem solve", "Requires constant direction"]),
                Category::new("memory", "Memory", "Skills related to recognizing and remembering")
                    .in_section("Social Cognition")
                    .option(7, "Complete Independence", "Remembers and recognizes independently")
                    .option(6, "Modified Independence", "Uses memory aids effectively")
                    .option(5, "Supervision", "Requires prompting 10% of time")
                    .option(4, "Minimal Assist", "Requires prompting 10-25% of time")
                    .option(3, "Moderate Assist", "Requires prompting 25-50% of time")
                    .option(2, "Maximal Assist", "Requires prompting 50-75% of time")
                    .option(1, "Total Assist", "Fails to remember more than 75% of time")
                    .quick_notes(7, &["Excellent memory function", "No memory concerns"])
                    .quick_notes(6, &["Uses calendar/reminders effectively", "Compensates well"])
                    .quick_notes(5, &["Needs occasional reminders", "Mostly remembers"])
                    .quick_notes(4, &["Needs frequent reminders", "Some memory deficits"])
                    .quick_notes(3, &["Moderate memory deficits", "Needs significant cueing"])
                    .quick_notes(2, &["Severe memory deficits", "Very limited recall"])
                    .quick_notes(
                        1,
                        &[
                            "Profound memory impairment",
                            "Cannot recall daily information",
                        ],
                    ),
            ]
        });
        &CATEGORIES
    }

    fn bands(&self) -> &[ScoreBand] {
        static BANDS: std::sync::LazyLock<Vec<ScoreBand>> = std::sync::LazyLock::new(|| {
            vec![
                ScoreBand::new(108, "Complete independence - no helper required"),
                ScoreBand::new(90, "Modified independence - device needed but no physical help"),
                ScoreBand::new(
                    54,
                    "Minimal to moderate assistance - patient performs 50-99% of tasks",
                ),
                ScoreBand::new(
                    36,
                    "Moderate to maximal assistance - patient performs 25-74% of tasks",
                ),
                ScoreBand::new(
                    0,
                    "Maximal to total assistance - patient performs less than 50% of tasks",
                ),
            ]
        });
        &BANDS
    }

    fn composites(&self) -> &[Composite] {
        static COMPOSITES: std::sync::LazyLock<Vec<Composite>> = std::sync::LazyLock::new(|| {
            vec![
                Composite::new("motor", "Motor", &["Self-Care", "Sphincter Control", "Mobility"]),
                Composite::new("cognitive", "Cognitive", &["Communication", "Social Cognition"]),
            ]
        });
        &COMPOSITES
    }
}
