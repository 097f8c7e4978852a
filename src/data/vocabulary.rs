//! Built-in clinical vocabulary and cue tables.

use crate::nlp::{
    lexicon::{CueSpec, ExamField, LexiconBundle, LexiconEntry},
    types::{Category, Intent, Sentiment},
};

type EntrySeed = (&'static str, f64, &'static [&'static str]);

const SYMPTOMS: &[EntrySeed] = &[
    (
        "Neck and back pain",
        0.9,
        &[
            "neck and back pain",
            "neck and back hurt",
            "neck and back hurts",
            "neck and back ached",
            "pain in my neck and back",
        ],
    ),
    (
        "Neck pain",
        0.85,
        &[
            "neck pain",
            "pain in my neck",
            "pain in the neck",
            "neck hurt",
            "neck hurts",
            "sore neck",
            "neck ache",
        ],
    ),
    (
        "Back pain",
        0.85,
        &[
            "back pain",
            "lower back pain",
            "pain in my back",
            "pain in the back",
            "back hurt",
            "back hurts",
            "sore back",
        ],
    ),
    ("Backache", 0.8, &["backache", "backaches"]),
    ("Shoulder pain", 0.85, &["shoulder pain", "pain in my shoulder", "shoulder hurts"]),
    (
        "Head impact",
        0.75,
        &["hit my head", "struck my head", "bumped my head", "head on the steering wheel"],
    ),
    ("Headache", 0.8, &["headache", "headaches", "migraine"]),
    ("Stiffness", 0.7, &["stiffness", "stiff"]),
    ("Discomfort", 0.6, &["discomfort"]),
    (
        "Trouble sleeping",
        0.75,
        &["trouble sleeping", "difficulty sleeping", "couldn't sleep", "can't sleep", "insomnia"],
    ),
    ("Dizziness", 0.8, &["dizziness", "dizzy"]),
    ("Nausea", 0.8, &["nausea", "nauseous"]),
    ("Fatigue", 0.7, &["fatigue", "exhausted", "tired all the time"]),
    ("Numbness", 0.75, &["numbness", "numb", "tingling"]),
];

const DIAGNOSES: &[EntrySeed] = &[
    ("Whiplash injury", 0.9, &["whiplash injury", "whiplash"]),
    ("Lower back strain", 0.85, &["lower back strain", "back strain", "lumbar strain"]),
    ("Cervical strain", 0.85, &["cervical strain", "neck strain"]),
    ("Concussion", 0.85, &["concussion"]),
    ("Fracture", 0.8, &["fracture", "fractured", "broken bone"]),
    ("Sprain", 0.7, &["sprain", "sprained"]),
    ("Soft tissue injury", 0.8, &["soft tissue injury", "soft tissue damage"]),
];

const TREATMENTS: &[EntrySeed] = &[
    (
        "Physiotherapy",
        0.85,
        &[
            "physiotherapy",
            "physiotherapy sessions",
            "sessions of physiotherapy",
            "physical therapy",
            "physio",
        ],
    ),
    (
        "Painkillers",
        0.85,
        &["painkillers", "painkiller", "pain killers", "analgesics", "ibuprofen", "paracetamol"],
    ),
    ("Medication", 0.7, &["medication", "medicine", "prescription"]),
    ("X-ray examination", 0.75, &["x-ray", "x-rays", "xray", "x ray"]),
    ("Imaging", 0.7, &["mri", "mri scan", "ct scan", "imaging"]),
    ("Bed rest", 0.6, &["bed rest", "resting"]),
    ("Heat and ice therapy", 0.65, &["heat therapy", "heat packs", "ice packs"]),
    (
        "Emergency department visit",
        0.6,
        &["accident and emergency", "a&e", "emergency room", "emergency department"],
    ),
];

const PROGNOSES: &[EntrySeed] = &[
    (
        "Full recovery expected",
        0.85,
        &["full recovery", "complete recovery", "recover fully", "fully recover"],
    ),
    (
        "No long-term damage expected",
        0.8,
        &[
            "no long-term damage",
            "no lasting damage",
            "no permanent damage",
            "no long-term impact",
            "no signs of long-term damage",
        ],
    ),
];

type CueSeed<T> = (&'static str, T, f64);

const SENTIMENT_CUES: &[CueSeed<Sentiment>] = &[
    ("worried", Sentiment::Anxious, 1.0),
    ("worry", Sentiment::Anxious, 1.0),
    ("worrying", Sentiment::Anxious, 1.0),
    ("concern", Sentiment::Anxious, 1.0),
    ("concerned", Sentiment::Anxious, 1.0),
    ("concerning", Sentiment::Anxious, 1.0),
    ("afraid", Sentiment::Anxious, 1.0),
    ("fear", Sentiment::Anxious, 1.0),
    ("scared", Sentiment::Anxious, 1.0),
    ("nervous", Sentiment::Anxious, 1.0),
    ("anxious", Sentiment::Anxious, 1.0),
    ("anxiety", Sentiment::Anxious, 1.0),
    ("hope", Sentiment::Anxious, 1.0),
    ("hoping", Sentiment::Anxious, 1.0),
    ("hopefully", Sentiment::Anxious, 1.0),
    ("not sure", Sentiment::Anxious, 1.0),
    ("uncertain", Sentiment::Anxious, 1.0),
    ("wondering", Sentiment::Anxious, 1.0),
    ("what if", Sentiment::Anxious, 1.0),
    ("might get worse", Sentiment::Anxious, 1.0),
    ("could be serious", Sentiment::Anxious, 1.0),
    ("something wrong", Sentiment::Anxious, 1.0),
    ("really bad", Sentiment::Anxious, 1.0),
    ("terrible", Sentiment::Anxious, 1.0),
    ("awful", Sentiment::Anxious, 1.0),
    ("unbearable", Sentiment::Anxious, 1.0),
    ("a lot of pain", Sentiment::Anxious, 1.0),
    ("hurts so much", Sentiment::Anxious, 1.0),
    ("can't take", Sentiment::Anxious, 1.0),
    ("affect me in the future", Sentiment::Anxious, 1.0),
    ("relief", Sentiment::Reassured, 1.0),
    ("relieved", Sentiment::Reassured, 1.0),
    ("glad", Sentiment::Reassured, 1.0),
    ("happy", Sentiment::Reassured, 1.0),
    ("pleased", Sentiment::Reassured, 1.0),
    ("thank", Sentiment::Reassured, 1.0),
    ("thanks", Sentiment::Reassured, 1.0),
    ("appreciate", Sentiment::Reassured, 1.0),
    ("grateful", Sentiment::Reassured, 1.0),
    ("great to hear", Sentiment::Reassured, 1.0),
    ("good to know", Sentiment::Reassured, 1.0),
    ("that's good", Sentiment::Reassured, 1.0),
    ("that's great", Sentiment::Reassured, 1.0),
    ("wonderful", Sentiment::Reassured, 1.0),
    ("excellent", Sentiment::Reassured, 1.0),
    ("doing better", Sentiment::Reassured, 1.0),
    ("feeling better", Sentiment::Reassured, 1.0),
    ("improving", Sentiment::Reassured, 1.0),
    ("improved", Sentiment::Reassured, 1.0),
    ("getting better", Sentiment::Reassured, 1.0),
    ("much better", Sentiment::Reassured, 1.0),
    ("makes sense", Sentiment::Reassured, 1.0),
    ("not worried", Sentiment::Reassured, 1.0),
    ("no concerns", Sentiment::Reassured, 1.0),
    ("yes", Sentiment::Neutral, 0.5),
    ("no", Sentiment::Neutral, 0.5),
    ("okay", Sentiment::Neutral, 0.5),
    ("alright", Sentiment::Neutral, 0.5),
    ("i had", Sentiment::Neutral, 0.5),
    ("i went", Sentiment::Neutral, 0.5),
    ("i took", Sentiment::Neutral, 0.5),
    ("i did", Sentiment::Neutral, 0.5),
    ("it was", Sentiment::Neutral, 0.5),
    ("there was", Sentiment::Neutral, 0.5),
    ("i see", Sentiment::Neutral, 0.5),
    ("understood", Sentiment::Neutral, 0.5),
    ("got it", Sentiment::Neutral, 0.5),
];

const INTENT_PATTERNS: &[CueSeed<Intent>] = &[
    (r"\b(will|does|is)\s+(this|it)\s+(affect|impact|get|be)\b", Intent::SeekingReassurance, 2.0),
    (r"\bdon't\b.*\bneed to worry\b", Intent::SeekingReassurance, 2.0),
    (r"\b(will|should)\s+i\s+be\s+(okay|fine|alright)\b", Intent::SeekingReassurance, 2.0),
    (r"\b(is|are)\s+(that|this|there)\s+(normal|okay|fine)\b", Intent::SeekingReassurance, 2.0),
    (r"\bhope\s+(it|this|that|things)\b", Intent::SeekingReassurance, 2.0),
    (
        r"\bi\s+(have|had|feel|felt|experience|experienced)\s+\w*\s*(pain|ache|discomfort)",
        Intent::ReportingSymptoms,
        2.0,
    ),
    (r"\bmy\s+\w+\s+(hurts?|aches?|is\s+sore)\b", Intent::ReportingSymptoms, 2.0),
    (r"\bi\s+(can't|couldn't|have\s+trouble)\b", Intent::ReportingSymptoms, 2.0),
    (r"\bthe\s+(pain|ache|discomfort)\s+(is|was|started)\b", Intent::ReportingSymptoms, 2.0),
    (r"\bi'm\s+(worried|concerned|afraid|scared|nervous)\b", Intent::ExpressingConcern, 2.0),
    (r"\bi\s+(worry|fear|dread)\b", Intent::ExpressingConcern, 2.0),
    (r"\bwhat\s+if\s+(it|this|things)\b", Intent::ExpressingConcern, 2.0),
    (r"\bcould\s+(this|it)\s+be\s+(serious|bad|dangerous)\b", Intent::ExpressingConcern, 2.0),
    (
        r"^(what|when|where|why|how|is|are|do|does|can|could|will|would|should)\b",
        Intent::AskingQuestions,
        2.0,
    ),
    (r"\?\s*$", Intent::AskingQuestions, 2.0),
    (r"\?", Intent::AskingQuestions, 1.5),
    (r"\bi\s+(went|visited|saw|had|took|did)\b", Intent::ProvidingInformation, 2.0),
    (r"\byes,?\s+i\b", Intent::ProvidingInformation, 2.0),
    (r"\bit\s+was\s+(on|at|in)\b", Intent::ProvidingInformation, 2.0),
    (r"\bthey\s+(said|told|gave|checked)\b", Intent::ProvidingInformation, 2.0),
];

const INTENT_PHRASES: &[(Intent, &[&str])] = &[
    (
        Intent::SeekingReassurance,
        &[
            "will this",
            "is this",
            "should i worry",
            "need to worry",
            "affect me",
            "in the future",
            "what if",
            "hoping",
            "get better",
            "gets better",
            "be okay",
            "is that normal",
        ],
    ),
    (
        Intent::ReportingSymptoms,
        &[
            "pain",
            "pains",
            "painful",
            "ache",
            "aches",
            "aching",
            "ached",
            "backache",
            "backaches",
            "headache",
            "headaches",
            "hurts",
            "hurt",
            "hurting",
            "discomfort",
            "sore",
            "soreness",
            "stiff",
            "stiffness",
            "can't sleep",
            "trouble sleeping",
            "have trouble",
            "felt",
            "feeling",
            "experiencing",
        ],
    ),
    (
        Intent::ExpressingConcern,
        &[
            "worried",
            "concerned",
            "afraid",
            "scared",
            "nervous",
            "fear",
            "anxious",
            "bothers me",
            "concerning",
        ],
    ),
    (
        Intent::AskingQuestions,
        &[
            "can you tell me",
            "what does this mean",
            "what",
            "when",
            "where",
            "why",
            "how",
            "which",
            "is it",
            "are there",
            "do i",
            "should i",
            "can i",
        ],
    ),
    (
        Intent::ProvidingInformation,
        &[
            "i went",
            "i had",
            "i took",
            "they said",
            "they gave",
            "it was",
            "i always",
            "i did",
            "i was",
        ],
    ),
];

/// Findings weigh 1.0. Announcements and exam targets weigh 0.5 and only
/// count alongside a finding.
const EXAMINATION_CUES: &[CueSeed<ExamField>] = &[
    ("physical examination", ExamField::PhysicalExam, 0.5),
    ("examination", ExamField::PhysicalExam, 0.5),
    ("exam", ExamField::PhysicalExam, 0.5),
    ("examine", ExamField::PhysicalExam, 0.5),
    ("check", ExamField::PhysicalExam, 0.5),
    ("mobility", ExamField::PhysicalExam, 0.5),
    ("reflexes", ExamField::PhysicalExam, 0.5),
    ("muscles", ExamField::PhysicalExam, 0.5),
    ("spine", ExamField::PhysicalExam, 0.5),
    ("palpation", ExamField::PhysicalExam, 0.5),
    ("range of movement", ExamField::PhysicalExam, 1.0),
    ("range of motion", ExamField::PhysicalExam, 1.0),
    ("tenderness", ExamField::PhysicalExam, 1.0),
    ("swelling", ExamField::PhysicalExam, 1.0),
    ("full mobility", ExamField::PhysicalExam, 1.0),
    ("good mobility", ExamField::PhysicalExam, 1.0),
    ("reflexes are normal", ExamField::PhysicalExam, 1.0),
    ("intact", ExamField::PhysicalExam, 1.0),
    ("looks good", ExamField::Observation, 1.0),
    ("look good", ExamField::Observation, 1.0),
    ("appears", ExamField::Observation, 1.0),
    ("seem", ExamField::Observation, 1.0),
    ("seems", ExamField::Observation, 1.0),
    ("no signs of", ExamField::Observation, 1.0),
    ("good condition", ExamField::Observation, 1.0),
    ("lasting damage", ExamField::Observation, 1.0),
    ("gait", ExamField::Observation, 0.5),
    ("posture", ExamField::Observation, 0.5),
];

const NEGATIONS: &[&str] = &[
    "no", "not", "never", "no longer", "don't", "doesn't", "didn't", "won't", "can't", "haven't",
    "hasn't", "isn't", "wasn't", "without", "denies", "deny", "denied", "nothing",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "so", "quite", "absolutely", "severe", "severely", "constant",
    "terrible", "a lot",
];

const ONGOING_CUES: &[&str] = &[
    "still", "now", "currently", "these days", "at the moment", "occasional", "occasionally",
    "sometimes", "now and then", "keep getting", "do get", "ongoing", "persistent", "lingering",
];

const VOCABULARY: &[&str] = &[
    "pain", "ache", "discomfort", "stiffness", "swelling", "numbness", "tingling", "weakness",
    "fatigue", "nausea", "dizziness", "headache", "neck", "back", "spine", "cervical", "lumbar",
    "thoracic", "shoulder", "head", "muscle", "muscles", "joint", "vertebra", "disc", "whiplash",
    "injury", "strain", "sprain", "fracture", "concussion", "inflammation", "trauma", "accident",
    "impact", "physiotherapy", "therapy", "medication", "painkillers", "treatment", "surgery",
    "injection", "exercise", "rehabilitation", "x-ray", "xray", "mri", "scan", "examination",
    "assessment", "recovery", "prognosis", "improvement", "healing", "chronic", "acute", "weeks",
    "months", "sessions", "follow-up", "appointment",
];

const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "anything", "are",
    "as", "at", "be", "because", "been", "before", "being", "but", "by", "can", "could", "did",
    "do", "does", "doing", "don't", "down", "during", "each", "even", "every", "everything",
    "for", "from", "further", "get", "go", "going", "got", "had", "has", "have", "having", "he",
    "her", "here", "him", "his", "how", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into",
    "is", "it", "it's", "its", "just", "know", "let's", "like", "me", "more", "most", "much",
    "my", "no", "nor", "not", "nothing", "now", "of", "off", "oh", "okay", "on", "once", "only",
    "or", "other", "our", "out", "over", "own", "really", "same", "see", "she", "should", "so",
    "some", "something", "still", "such", "sure", "than", "thank", "thanks", "that", "that's",
    "the", "their", "them", "then", "there", "there's", "these", "they", "think", "this",
    "those", "through", "to", "too", "uh", "um", "under", "until", "up", "us", "very", "was",
    "we", "well", "went", "were", "what", "when", "where", "which", "while", "who", "why",
    "will", "with", "would", "yes", "you", "you're", "your", "yours",
];

fn entries(category: Category, seeds: &[EntrySeed]) -> Vec<LexiconEntry> {
    seeds
        .iter()
        .map(|(label, weight, forms)| LexiconEntry {
            category,
            label: (*label).to_string(),
            surface_forms: forms.iter().map(|f| (*f).to_string()).collect(),
            weight: *weight,
        })
        .collect()
}

fn cues<T: Copy>(seeds: &[CueSeed<T>], regex: bool) -> Vec<CueSpec<T>> {
    seeds
        .iter()
        .map(|(pattern, target, weight)| CueSpec {
            pattern: (*pattern).to_string(),
            target: *target,
            weight: *weight,
            regex,
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Assemble the built-in bundle.
pub fn builtin_bundle() -> LexiconBundle {
    let mut all_entries = entries(Category::Symptom, SYMPTOMS);
    all_entries.extend(entries(Category::Diagnosis, DIAGNOSES));
    all_entries.extend(entries(Category::Treatment, TREATMENTS));
    all_entries.extend(entries(Category::Prognosis, PROGNOSES));

    let mut intent_cues = cues(INTENT_PATTERNS, true);
    for (intent, phrases) in INTENT_PHRASES {
        intent_cues.extend(phrases.iter().map(|phrase| CueSpec {
            pattern: (*phrase).to_string(),
            target: *intent,
            weight: 1.0,
            regex: false,
        }));
    }

    LexiconBundle {
        entries: all_entries,
        sentiment_cues: cues(SENTIMENT_CUES, false),
        intent_cues,
        examination_cues: cues(EXAMINATION_CUES, false),
        negations: strings(NEGATIONS),
        intensifiers: strings(INTENSIFIERS),
        ongoing_cues: strings(ONGOING_CUES),
        vocabulary: strings(VOCABULARY),
        stopwords: strings(STOPWORDS),
    }
}
