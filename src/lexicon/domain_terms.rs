//! Built-in topical domain lexicon data.
//!
//! Keyword weights are in keyword units (scaled by `DomainConfig::keyword_weight`);
//! phrase boosts are in phrase units (scaled by `DomainConfig::phrase_weight`).
//! Most keywords carry 1.0; ambiguous ones carry 0.5.

use super::PhraseEffect;
use crate::outcome::Domain;

/// (domain, keyword units, terms).
pub(super) const DOMAIN_TERMS: &[(Domain, f64, &[&str])] = &[
    (
        Domain::ExerciseFitness,
        1.0,
        &[
            "gym",
            "workout",
            "workouts",
            "exercise",
            "exercised",
            "exercising",
            "run",
            "running",
            "jog",
            "jogged",
            "jogging",
            "lift",
            "lifting",
            "lifted",
            "weights",
            "yoga",
            "pilates",
            "cardio",
            "treadmill",
            "squat",
            "squats",
            "pushups",
            "reps",
            "marathon",
            "training",
            "stretch",
            "stretching",
            "sore",
            "soreness",
            "muscle",
            "muscles",
            "protein",
            "fitness",
            "bike",
            "biking",
            "cycling",
            "swim",
            "swimming",
            "swam",
        ],
    ),
    (
        Domain::Family,
        1.0,
        &[
            "family",
            "families",
            "mom",
            "moms",
            "mum",
            "mums",
            "mother",
            "mothers",
            "dad",
            "dads",
            "father",
            "fathers",
            "parent",
            "parents",
            "son",
            "sons",
            "daughter",
            "daughters",
            "brother",
            "brothers",
            "sister",
            "sisters",
            "grandma",
            "grandmas",
            "grandpa",
            "grandpas",
            "grandmother",
            "grandfather",
            "grandparents",
            "grandson",
            "granddaughter",
            "aunt",
            "aunts",
            "uncle",
            "uncles",
            "cousin",
            "cousins",
            "nephew",
            "nephews",
            "niece",
            "nieces",
            "sibling",
            "siblings",
            "kid",
            "kids",
            "child",
            "children",
            "baby",
            "babies",
            "toddler",
            "toddlers",
        ],
    ),
    (
        Domain::Friends,
        1.0,
        &[
            "friend",
            "friends",
            "friendship",
            "buddy",
            "buddies",
            "pal",
            "pals",
            "bestie",
            "besties",
            "best_friend",
            "best_friends",
            "roommate",
            "roommates",
            "hangout",
            "hang_out",
            "hanging_out",
            "hung_out",
        ],
    ),
    (
        Domain::Relationships,
        1.0,
        &[
            "relationship",
            "relationships",
            "husband",
            "wife",
            "wives",
            "spouse",
            "partner",
            "partners",
            "boyfriend",
            "girlfriend",
            "fiance",
            "fiancee",
            "fianc",
            "hubby",
            "marriage",
            "married",
            "marry",
            "wedding",
            "divorce",
            "divorced",
            "separation",
            "separated",
            "breakup",
            "break_up",
            "broke_up",
            "ex",
        ],
    ),
    (
        Domain::LoveRomance,
        1.0,
        &[
            "romance",
            "romantic",
            "dating",
            "crush",
            "flirt",
            "flirted",
            "flirting",
            "kiss",
            "kissed",
            "kissing",
            "valentine",
            "valentines",
            "anniversary",
            "butterflies",
            "sweetheart",
            "soulmate",
            "passion",
            "passionate",
        ],
    ),
    (
        Domain::FoodEating,
        1.0,
        &[
            "food",
            "eat",
            "eating",
            "ate",
            "meal",
            "meals",
            "breakfast",
            "lunch",
            "dinner",
            "snack",
            "snacks",
            "snacking",
            "cook",
            "cooked",
            "cooking",
            "recipe",
            "recipes",
            "restaurant",
            "restaurants",
            "pizza",
            "coffee",
            "dessert",
            "cake",
            "delicious",
            "tasty",
            "hungry",
            "hunger",
            "appetite",
            "diet",
            "dieting",
            "takeout",
            "kitchen",
            "bake",
            "baked",
            "baking",
            "grocery",
            "groceries",
            "veggies",
            "vegetables",
            "sandwich",
            "burger",
            "sushi",
        ],
    ),
    (
        Domain::SleepRest,
        1.0,
        &[
            "sleep",
            "slept",
            "sleeping",
            "sleepy",
            "nap",
            "napped",
            "napping",
            "insomnia",
            "tired",
            "exhausted",
            "exhausting",
            "exhaustion",
            "rest",
            "rested",
            "resting",
            "restless",
            "bedtime",
            "bed",
            "awake",
            "woke",
            "wake",
            "waking",
            "drowsy",
            "dream",
            "dreams",
            "dreamt",
            "dreamed",
            "nightmare",
            "overslept",
            "snooze",
            "doze",
            "dozed",
        ],
    ),
    (
        Domain::HealthMedical,
        1.0,
        &[
            "doctor",
            "doctors",
            "dentist",
            "appointment",
            "hospital",
            "clinic",
            "sick",
            "sickness",
            "ill",
            "illness",
            "flu",
            "fever",
            "headache",
            "headaches",
            "migraine",
            "medicine",
            "medication",
            "meds",
            "pill",
            "pills",
            "prescription",
            "symptom",
            "symptoms",
            "diagnosis",
            "diagnosed",
            "therapy",
            "therapist",
            "surgery",
            "pain",
            "ache",
            "aching",
            "nurse",
            "vaccine",
            "checkup",
            "allergy",
            "allergies",
            "injury",
            "injured",
            "mental_health",
        ],
    ),
    (
        Domain::WorkCareer,
        1.0,
        &[
            "work",
            "worked",
            "working",
            "job",
            "jobs",
            "boss",
            "bosses",
            "manager",
            "coworker",
            "coworkers",
            "colleague",
            "colleagues",
            "office",
            "meeting",
            "meetings",
            "deadline",
            "deadlines",
            "project",
            "projects",
            "client",
            "clients",
            "promotion",
            "promoted",
            "interview",
            "interviews",
            "interviewed",
            "resume",
            "hired",
            "hiring",
            "fired",
            "layoff",
            "layoffs",
            "laid_off",
            "career",
            "shift",
            "shifts",
            "overtime",
            "presentation",
            "email",
            "emails",
            "workload",
            "burnout",
            "burned_out",
            "burnt_out",
            "side_hustle",
        ],
    ),
    (
        Domain::MoneyFinances,
        1.0,
        &[
            "money",
            "budget",
            "budgeting",
            "rent",
            "mortgage",
            "bills",
            "debt",
            "debts",
            "loan",
            "loans",
            "savings",
            "paycheck",
            "paychecks",
            "salary",
            "spend",
            "spending",
            "spent",
            "expense",
            "expenses",
            "expensive",
            "afford",
            "bank",
            "banking",
            "invest",
            "investing",
            "investment",
            "investments",
            "tax",
            "taxes",
            "credit_card",
            "credit_cards",
            "cash",
            "paid",
            "pay",
            "paying",
            "financial",
            "finances",
            "price",
            "prices",
            "cost",
            "costs",
            "real_estate",
        ],
    ),
    (
        Domain::SchoolLearning,
        1.0,
        &[
            "school",
            "class",
            "classes",
            "classroom",
            "teacher",
            "teachers",
            "professor",
            "homework",
            "assignment",
            "assignments",
            "exam",
            "exams",
            "test",
            "tests",
            "quiz",
            "quizzes",
            "study",
            "studying",
            "studied",
            "grade",
            "grades",
            "semester",
            "lecture",
            "lectures",
            "college",
            "university",
            "campus",
            "degree",
            "course",
            "courses",
            "tutor",
            "tutoring",
            "essay",
            "essays",
            "learn",
            "learning",
            "learned",
            "textbook",
            "finals",
            "midterm",
            "midterms",
            "student",
            "students",
        ],
    ),
    (
        Domain::SpiritualityReligion,
        1.0,
        &[
            "church",
            "temple",
            "mosque",
            "pray",
            "prayed",
            "praying",
            "prayer",
            "prayers",
            "god",
            "faith",
            "bible",
            "quran",
            "meditate",
            "meditated",
            "meditating",
            "meditation",
            "spiritual",
            "spirituality",
            "worship",
            "sermon",
            "blessing",
            "soul",
            "scripture",
            "religion",
            "religious",
            "sabbath",
            "ramadan",
            "karma",
        ],
    ),
    (
        Domain::RecreationLeisure,
        1.0,
        &[
            "game",
            "games",
            "gaming",
            "video_game",
            "video_games",
            "play",
            "played",
            "playing",
            "hobby",
            "hobbies",
            "movie",
            "movies",
            "film",
            "films",
            "series",
            "netflix",
            "concert",
            "concerts",
            "festival",
            "party",
            "parties",
            "picnic",
            "puzzle",
            "puzzles",
            "fishing",
            "golf",
            "golfing",
            "bowling",
            "barbecue",
            "bbq",
            "relax",
            "relaxed",
            "relaxing",
            "chill",
            "chilling",
            "leisure",
            "reading",
            "book",
            "books",
            "novel",
        ],
    ),
    (
        Domain::TravelNature,
        1.0,
        &[
            "travel",
            "traveled",
            "traveling",
            "travelling",
            "trip",
            "trips",
            "road_trip",
            "flight",
            "flights",
            "airport",
            "plane",
            "hotel",
            "airbnb",
            "vacation",
            "beach",
            "mountain",
            "mountains",
            "hike",
            "hiked",
            "hiking",
            "trail",
            "trails",
            "camp",
            "camped",
            "camping",
            "nature",
            "outdoors",
            "park",
            "lake",
            "river",
            "ocean",
            "forest",
            "woods",
            "sunset",
            "sunrise",
            "garden",
            "gardening",
            "explore",
            "explored",
            "exploring",
            "sightseeing",
            "passport",
            "abroad",
        ],
    ),
    (
        Domain::CreativityArt,
        1.0,
        &[
            "art",
            "artist",
            "paint",
            "painted",
            "painting",
            "draw",
            "drawing",
            "drew",
            "sketch",
            "sketched",
            "sketching",
            "write",
            "writing",
            "wrote",
            "poem",
            "poems",
            "poetry",
            "story",
            "stories",
            "music",
            "song",
            "songs",
            "sing",
            "singing",
            "sang",
            "guitar",
            "piano",
            "violin",
            "craft",
            "crafts",
            "crafting",
            "knit",
            "knitting",
            "crochet",
            "photography",
            "design",
            "designed",
            "designing",
            "pottery",
            "ceramics",
            "doodle",
            "doodling",
            "creative",
            "creativity",
            "instrument",
            "dance",
            "danced",
            "dancing",
        ],
    ),
    (
        Domain::CommunitySocietyPolitics,
        1.0,
        &[
            "community",
            "neighborhood",
            "neighbor",
            "neighbors",
            "volunteer",
            "volunteered",
            "volunteering",
            "charity",
            "donate",
            "donated",
            "donation",
            "election",
            "elections",
            "vote",
            "voted",
            "voting",
            "politics",
            "political",
            "politician",
            "government",
            "protest",
            "protests",
            "protested",
            "rally",
            "petition",
            "council",
            "mayor",
            "policy",
            "policies",
            "activism",
            "activist",
            "society",
            "civic",
            "campaign",
        ],
    ),
    (
        Domain::TechnologyMediaInternet,
        1.0,
        &[
            "phone",
            "phones",
            "computer",
            "laptop",
            "tablet",
            "internet",
            "wifi",
            "online",
            "website",
            "websites",
            "app",
            "apps",
            "social_media",
            "instagram",
            "facebook",
            "twitter",
            "tiktok",
            "youtube",
            "screen",
            "screens",
            "screen_time",
            "scroll",
            "scrolled",
            "scrolling",
            "podcast",
            "podcasts",
            "streaming",
            "video",
            "videos",
            "tech",
            "technology",
            "software",
            "coding",
            "gadget",
            "gadgets",
            "device",
            "devices",
            "browser",
            "google",
            "googled",
            "texted",
            "texting",
            "news",
            "media",
            "doomscrolling",
        ],
    ),
    (
        Domain::SelfGrowthHabits,
        1.0,
        &[
            "habit",
            "habits",
            "routine",
            "routines",
            "goal",
            "goals",
            "journal",
            "journaled",
            "journaling",
            "reflect",
            "reflected",
            "reflecting",
            "reflection",
            "mindful",
            "mindfulness",
            "growth",
            "improve",
            "improved",
            "improving",
            "improvement",
            "progress",
            "discipline",
            "disciplined",
            "motivation",
            "productive",
            "productivity",
            "procrastinate",
            "procrastinated",
            "procrastinating",
            "procrastination",
            "resolution",
            "resolutions",
            "self_care",
            "affirmation",
            "affirmations",
            "mindset",
            "streak",
        ],
    ),
];

/// Phrase patterns matched against lowercased sentence text. Boost units are
/// multiplied by the configured phrase weight; suppressions zero the target
/// domain for that sentence after keyword accumulation.
pub(super) const DOMAIN_PHRASES: &[(&str, &[PhraseEffect])] = &[
    // "work out"/"workout" is exercise, and "work" must not also score.
    (
        r"\bwork(?:ing|ed|s)?\s+out\b|\bwork[-\s]?outs?\b",
        &[
            PhraseEffect::Boost(Domain::ExerciseFitness, 1.0),
            PhraseEffect::Suppress(Domain::WorkCareer),
        ],
    ),
    (
        r"\bin\s+love\b|\blove\s+(?:him|her|them)\b|\bdate\s+night\b|\bwent\s+on\s+a\s+date\b",
        &[PhraseEffect::Boost(Domain::LoveRomance, 1.0)],
    ),
    (
        r"\bcaught\s+a\s+cold\b|\bthr(?:ew|ow(?:ing)?)\s+up\b|\bunder\s+the\s+weather\b",
        &[PhraseEffect::Boost(Domain::HealthMedical, 1.0)],
    ),
    (
        r"\bcan.?t\s+(?:sleep|fall\s+asleep)\b|\bcouldn.?t\s+(?:sleep|fall\s+asleep)\b|\bfell\s+asleep\b|\bstay(?:ed)?\s+up\s+late\b|\ball[-\s]?nighter\b",
        &[PhraseEffect::Boost(Domain::SleepRest, 1.0)],
    ),
    (
        r"\bgot\s+a\s+raise\b|\bpay\s?day\b|\bpaycheck\s+to\s+paycheck\b|\b(?:i.?m|im|flat)\s+broke\b",
        &[PhraseEffect::Boost(Domain::MoneyFinances, 1.0)],
    ),
    (
        r"\bquit\s+my\s+job\b|\bgot\s+(?:hired|fired|promoted)\b|\bjob\s+interview\b",
        &[PhraseEffect::Boost(Domain::WorkCareer, 1.0)],
    ),
    (
        r"\bnew\s+year.?s?\s+resolutions?\b",
        &[PhraseEffect::Boost(Domain::SelfGrowthHabits, 1.0)],
    ),
    (
        r"\bfamily\s+(?:dinner|reunion|gathering)\b",
        &[PhraseEffect::Boost(Domain::Family, 1.0)],
    ),
    (
        r"\bnight\s+out\b|\bgame\s+night\b|\bmovie\s+night\b",
        &[PhraseEffect::Boost(Domain::RecreationLeisure, 1.0)],
    ),
    (
        r"\bfinals?\s+week\b|\bback\s+to\s+school\b",
        &[PhraseEffect::Boost(Domain::SchoolLearning, 1.0)],
    ),
];

/// Non-spouse kin terms. Any hit applies the family bias.
pub(super) const KINSHIP_TERMS: &[&str] = &[
    "mom",
    "moms",
    "mum",
    "mums",
    "mommy",
    "mama",
    "mother",
    "mothers",
    "dad",
    "dads",
    "daddy",
    "papa",
    "father",
    "fathers",
    "parent",
    "parents",
    "son",
    "sons",
    "daughter",
    "daughters",
    "brother",
    "brothers",
    "sister",
    "sisters",
    "grandma",
    "grandmas",
    "grandpa",
    "grandpas",
    "grandmother",
    "grandmothers",
    "grandfather",
    "grandfathers",
    "grandparents",
    "grandson",
    "granddaughter",
    "aunt",
    "aunts",
    "uncle",
    "uncles",
    "cousin",
    "cousins",
    "nephew",
    "nephews",
    "niece",
    "nieces",
    "sibling",
    "siblings",
    "kid",
    "kids",
    "child",
    "children",
    "baby",
    "babies",
    "toddler",
    "toddlers",
];

/// Spouse-type relational terms. When these are the only relational terms
/// present, the family bias is withheld so partner-only entries stay in
/// Relationships.
pub(super) const SPOUSE_TERMS: &[&str] = &[
    "husband",
    "husbands",
    "wife",
    "wives",
    "spouse",
    "spouses",
    "partner",
    "partners",
    "fiance",
    "fiancee",
    "fianc",
    "hubby",
    "boyfriend",
    "boyfriends",
    "girlfriend",
    "girlfriends",
];
