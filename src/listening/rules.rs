//! The hand-authored reflective rule set.
//!
//! Each rule pairs a regular expression with a small pool of response
//! templates. Patterns are matched against lowercased sentences, so they are
//! written in lowercase with optional apostrophe handling (`['’]?`) where
//! contractions appear. A template marked `true` needs the rule's first
//! capture group to have produced usable text; every rule keeps at least one
//! capture-free template so a match can always answer.
//!
//! Weights express emotional salience. Grief, panic, and job loss outrank
//! small-talk patterns so that when several rules match one sentence, the
//! heavier concern is the one reflected back.

use regex::Regex;

/// A compiled reflective rule.
pub(crate) struct Rule {
    pub key: &'static str,
    pub pattern: Regex,
    pub weight: i32,
    /// Weight plus capped capture count. Favors richer patterns at equal weight.
    pub specificity: i32,
    pub variants: &'static [(&'static str, bool)],
}

/// Compile the builtin rule table in insertion order.
///
/// # Panics
/// Panics if a builtin pattern fails to compile. Covered by a test over the
/// whole table, so a bad pattern cannot reach a release build.
pub(crate) fn build_rules() -> Vec<Rule> {
    RULE_TABLE
        .iter()
        .map(|(key, pattern, weight, variants)| {
            #[allow(clippy::panic)]
            let compiled =
                Regex::new(pattern).unwrap_or_else(|err| panic!("rule {key}: bad pattern: {err}"));
            let captures = compiled.captures_len().saturating_sub(1);
            Rule {
                key,
                weight: *weight,
                specificity: *weight + (captures as i32).min(2),
                pattern: compiled,
                variants,
            }
        })
        .collect()
}

type RuleRow = (
    &'static str,
    &'static str,
    i32,
    &'static [(&'static str, bool)],
);

#[rustfmt::skip]
const RULE_TABLE: &[RuleRow] = &[
    // ── Direct feeling statements ───────────────────────────────────────────
    ("feel-like", r"\bi\s+(?:feel|felt)\s+like\s+(.+)", 3, &[
        ("Feeling like $1 says a lot about how much this matters. What brought the feeling on?", true),
        ("What's underneath that feeling, if you sit with it for a moment?", false),
        ("How long has that feeling been around?", false),
    ]),
    ("feel-direct", r"\bi\s+(?:feel|felt)\s+(?:so\s+|really\s+|pretty\s+|very\s+)?([a-z]+)\b", 2, &[
        ("That feeling of being $1 deserves some room. When does it hit hardest?", true),
        ("Where in your day does that feeling show up most?", false),
        ("If the feeling could talk, what would it say?", false),
    ]),
    ("cant-stop", r"\bi\s+can['’]?t\s+stop\s+(.+)", 3, &[
        ("It keeps pulling at you$1. What happens if you let it be there for one minute instead of fighting it?", true),
        ("What do you think keeps pulling you back in?", false),
        ("When does it loosen its grip, even briefly?", false),
    ]),
    ("keep-doing", r"\bi\s+keep\s+(.+)", 2, &[
        ("You keep $1. What do you make of that pattern?", true),
        ("Patterns like that usually guard something. Any idea what?", false),
    ]),
    ("so-adjective", r"\bi['’]?m\s+(?:just\s+)?so\s+([a-z]+)\b", 2, &[
        ("So $1. Let that word breathe for a second. What's behind it?", true),
        ("That 'so' carries a lot. What pushed it this far?", false),
    ]),
    ("been-feeling", r"\bi['’]?ve\s+been\s+(.+)", 1, &[
        ("You've been $1 for a while now. What would lighter feel like?", true),
        ("What's been keeping that going, day after day?", false),
    ]),
    ("dont-know", r"\bi\s+don['’]?t\s+know\s+((?:what|how|why|if|where)\s+.+)", 2, &[
        ("Not knowing $1 is its own kind of tiring. What's one thing you do know here?", true),
        ("Sitting in not-knowing is hard. What would one small next step look like?", false),
    ]),
    ("wish", r"\bi\s+wish\s+(.+)", 2, &[
        ("Wishing $1 points at something you care about. What part of it is in your hands?", true),
        ("If that wish came true tomorrow, what would actually change?", false),
    ]),
    ("hate", r"\bi\s+hate\s+(.+)", 2, &[
        ("Strong word, and probably earned. What does hating $1 cost you day to day?", true),
        ("What would a little distance from it take?", false),
    ]),
    ("love", r"\bi\s+love\s+(.+)", 2, &[
        ("It's clear how much $1 means to you. What makes it land so deeply?", true),
        ("Hold onto that. What would more of it look like this week?", false),
    ]),
    ("miss", r"\bi\s+miss\s+(.+)", 3, &[
        ("Missing $1 takes up real space. What do you miss most specifically?", true),
        ("What would honoring that missing look like, instead of pushing it away?", false),
    ]),
    ("cant-do", r"\bi\s+can['’]?t\s+(.+)", 1, &[
        ("Right now it feels impossible. Does that hold every day, or does it come and go?", false),
        ("'Can't' sometimes means exhausted and sometimes means blocked. Which one is this?", false),
    ]),
    ("always", r"\b(?:i\s+always|it['’]?s\s+always)\s+(.+)", 1, &[
        ("Always is a heavy word. When was the most recent exception, even a small one?", false),
        ("What keeps that pattern so reliable?", false),
    ]),
    ("never", r"\b(?:i\s+never|nothing\s+ever)\s+(.+)", 1, &[
        ("Never leaves no room to breathe. Is it truly never, or does it feel that way lately?", false),
        ("What would one exception look like?", false),
    ]),

    // ── Work ────────────────────────────────────────────────────────────────
    ("boss-does", r"\b(?:my|the)\s+(?:boss|manager|supervisor)\s+(.+)", 3, &[
        ("So the boss $1, and the overflow lands on you. How are you holding up?", true),
        ("What would you say to them if there were no fallout?", false),
        ("How much of this is the person, and how much is the role they're in?", false),
    ]),
    ("deadline", r"\bdeadlines?\b.*\b(?:loom|crush|pile|stack|slip|tight|stress|pressure|miss)|\b(?:tight|brutal|impossible)\s+deadlines?\b", 3, &[
        ("Deadlines have a way of swallowing everything else. What's the real cost right now?", false),
        ("Which of these deadlines actually matters most?", false),
        ("What would you drop if you were allowed to drop one thing?", false),
    ]),
    ("laid-off", r"\b(?:got|getting|was|were|been|being)\s+(?:fired|laid[\s-]?off|let\s+go)\b", 5, &[
        ("That's a real loss, and it's okay for it to hit hard. How are you taking care of yourself today?", false),
        ("Losing a job shakes more than income. What feels shakiest right now?", false),
        ("What do you need most in the next week, practically or otherwise?", false),
    ]),
    ("quit-job", r"\b(?:want|wanted|thinking|thought)\s+(?:to|about)\s+quit(?:ting)?\b|\bi\s+quit\b", 4, &[
        ("Quitting keeps coming up. What would leaving give you that staying can't?", false),
        ("If you imagine having already quit, what's the first feeling that shows up?", false),
    ]),
    ("workload", r"\btoo\s+much\s+(?:work|on\s+my\s+plate)\b|\bworkload\b|\bovertime\b|\bshort[\s-]?staffed\b", 3, &[
        ("That pace takes a toll. Where does the overflow usually land?", false),
        ("What would a sane week look like, concretely?", false),
        ("Who could take one thing off your plate if you asked?", false),
    ]),
    ("coworker", r"\b(?:coworker|colleague|teammate)s?\b.*\b(?:rude|ignor|credit|undermin|annoy|drama|gossip|yell|blame)", 3, &[
        ("Friction with a colleague follows you home. What happened this time?", false),
        ("Do you want this smoothed over, or do you want it named?", false),
    ]),
    ("review-promotion", r"\bpromotion\b|\bperformance\s+review\b|\bgot\s+promoted\b|\braise\b.*\b(?:ask|asked|asking|deserve|denied)", 3, &[
        ("Being measured at work stirs a lot up. What outcome are you bracing for?", false),
        ("What would recognition actually change for you?", false),
    ]),
    ("burnout", r"\bburn(?:ed|t)?[\s-]?out\b|\brunning\s+on\s+empty\b|\bnothing\s+left\s+to\s+give\b", 4, &[
        ("Burnout isn't fixed by one good night's sleep. What's been draining the tank the longest?", false),
        ("If your energy had a budget, what's the biggest line item?", false),
        ("What's one demand you could set down this week without the sky falling?", false),
    ]),
    ("job-search", r"\bjob\s+(?:search|hunt)(?:ing)?\b|\bapplications?\b.*\bjobs?\b|\bjob\s+interviews?\b|\binterviews?\b", 2, &[
        ("Searching is its own job, with rejection sprinkled in. How are you pacing yourself?", false),
        ("What would help you feel ready rather than just anxious?", false),
    ]),
    ("meetings", r"\bmeetings?\b.*\b(?:back[\s-]?to[\s-]?back|endless|pointless|all\s+day|too\s+many)|\b(?:endless|pointless|another)\s+meetings?\b", 2, &[
        ("A day of meetings leaves no room to actually think. When do you get your real work done?", false),
        ("Which of those could have been an email?", false),
    ]),

    // ── Family ──────────────────────────────────────────────────────────────
    ("mom", r"\bmy\s+(?:mom|mother|mum)\b\s*(.*)", 3, &[
        ("So your mom $1. How did that land on you?", true),
        ("Moms occupy a lot of internal space. What did this bring up for you?", false),
        ("What do you wish she could hear from you?", false),
    ]),
    ("dad", r"\bmy\s+(?:dad|father)\b\s*(.*)", 3, &[
        ("So your dad $1. What's the feeling underneath that?", true),
        ("How do conversations with him usually leave you feeling?", false),
    ]),
    ("parents", r"\bmy\s+parents\b\s*(.*)", 3, &[
        ("So your parents $1. Where does that leave you?", true),
        ("What do you find yourself becoming when you're around them?", false),
    ]),
    ("kids", r"\bmy\s+(?:kids?|children|son|daughter)\b", 3, &[
        ("Parenting asks everything some days. What's the hardest part of this one?", false),
        ("What would support look like for you in this, not just for them?", false),
        ("Kids have a way of finding the exact nerve. How are you recovering?", false),
    ]),
    ("sibling", r"\bmy\s+(?:brother|sister|sibling)s?\b\s*(.*)", 2, &[
        ("So your sibling $1. Is this a new pattern or a very old one?", true),
        ("Sibling history makes everything echo. What's the current chapter about?", false),
    ]),
    ("family-conflict", r"\b(?:family|relatives)\b.*\b(?:fight|fought|argu|yell|drama|tension|blow[\s-]?up)", 4, &[
        ("Family conflict hits different because you can't just walk away. How are you doing with it?", false),
        ("What role did you end up playing this time?", false),
        ("What boundary would protect you here, even a small one?", false),
    ]),
    ("family-visit", r"\b(?:visit(?:ing|ed)?|staying\s+with|went\s+(?:home|back\s+home))\b.*\bfamily\b|\bfamily\s+(?:visit|dinner|gathering|reunion)\b", 2, &[
        ("Family time can fill you up and wear you out in the same afternoon. Which was it?", false),
        ("What version of you showed up there, and did it feel like you?", false),
    ]),
    ("caregiving", r"\b(?:taking\s+care\s+of|caring\s+for|caregiv\w*)\b.*\b(?:mom|dad|mother|father|parent|grandm\w*|grandp\w*)", 4, &[
        ("Caring for a parent reverses so much. Who's taking care of you in this?", false),
        ("What part of this weighs most, the tasks or the watching?", false),
    ]),

    // ── Relationships and romance ───────────────────────────────────────────
    ("partner-conflict", r"\b(?:my\s+)?(?:partner|husband|wife|boyfriend|girlfriend|spouse)\b.*\b(?:fight|fought|argu|yell|mad|angry|silent)", 4, &[
        ("A fight with your person shakes the ground under everything else. What was it really about?", false),
        ("Underneath the argument, what were you hoping they'd understand?", false),
        ("What does repair usually look like for you two?", false),
    ]),
    ("partner-general", r"\bmy\s+(?:partner|husband|wife|boyfriend|girlfriend|spouse)\s+(.+)", 3, &[
        ("So your partner $1. What did that stir in you?", true),
        ("When they do that, what story do you start telling yourself?", false),
    ]),
    ("breakup", r"\bbr(?:oke|eak(?:ing)?)\s+up\b|\bbreakup\b|\b(?:dumped|left)\s+me\b|\bwe\s+(?:ended|split)\b", 5, &[
        ("Breakups grieve a future, not just a person. Be gentle with yourself. What hurts most today?", false),
        ("What do you miss, and what are you quietly relieved about?", false),
        ("Who's in your corner while you go through this?", false),
    ]),
    ("ex", r"\bmy\s+ex\b\s*(.*)", 3, &[
        ("So your ex $1. What did noticing that tell you about where you are now?", true),
        ("Exes linger in the architecture. What brought them to mind today?", false),
    ]),
    ("crush", r"\b(?:have|got)\s+a\s+crush\b|\bcrush\s+on\b|\bcan['’]?t\s+stop\s+thinking\s+about\s+(?:him|her|them)\b", 2, &[
        ("That flutter is its own kind of alive. What draws you to them?", false),
        ("What would you want them to know, if nerves weren't a factor?", false),
    ]),
    ("dating", r"\b(?:went\s+on|had|have)\s+a\s+date\b|\bfirst\s+date\b|\bdating\s+apps?\b", 2, &[
        ("Dating is vulnerability with a calendar invite. How did it actually feel?", false),
        ("What are you actually hoping to find?", false),
    ]),
    ("marriage-strain", r"\bmarriage\b.*\b(?:strain|struggl|distan|therapy|counsel|rough|falling\s+apart)|\bwe\s+barely\s+talk\b", 4, &[
        ("Long relationships move through seasons, and some are winters. What changed, and when?", false),
        ("What would turning toward each other look like this week?", false),
    ]),
    ("jealousy", r"\bjealous\w*\b|\benvious\b|\benvy\b", 2, &[
        ("Jealousy points at something you want. What is it really about for you?", false),
        ("What changes if you treat that envy as information instead of shame?", false),
    ]),
    ("long-distance", r"\blong[\s-]?distance\b|\b(?:miles|timezones?|time\s+zones?)\s+(?:apart|away)\b", 3, &[
        ("Distance makes ordinary closeness a project. What's the hardest part this week?", false),
        ("What small ritual keeps you two connected across it?", false),
    ]),
    ("unheard", r"\b(?:doesn['’]?t|don['’]?t|never)\s+listens?\s+to\s+me\b|\bnobody\s+listens\b|\bnot\s+(?:being\s+)?heard\b", 3, &[
        ("Not being heard by someone close is lonely in a particular way. What do you most need them to get?", false),
        ("When you imagine being fully heard, what does the other person do differently?", false),
    ]),

    // ── Friends and social life ─────────────────────────────────────────────
    ("friend-conflict", r"\bmy\s+(?:best\s+)?friends?\b.*\b(?:fight|fought|argu|mad|hurt|ignor|ghost|cancel)", 3, &[
        ("Friction with a friend stings because it's supposed to be the easy relationship. What happened?", false),
        ("Do you want to repair this, or are you re-evaluating it?", false),
    ]),
    ("friend-general", r"\bmy\s+(?:best\s+)?friends?\s+(.+)", 2, &[
        ("So your friend $1. How did that sit with you?", true),
        ("What does this friendship give you these days?", false),
    ]),
    ("left-out", r"\bleft\s+(?:me\s+)?out\b|\bwasn['’]?t\s+invited\b|\bexcluded\b|\bthird\s+wheel\b", 3, &[
        ("Being left out hurts at any age. What did you do with the feeling?", false),
        ("Is this a pattern with these people, or a one-off that landed hard?", false),
    ]),
    ("lonely", r"\blonel(?:y|iness)\b|\b(?:so|feel|feeling|felt)\s+alone\b|\bno\s+one\s+to\s+talk\s+to\b", 4, &[
        ("Loneliness is heavy precisely because it's invisible. When does it press hardest?", false),
        ("What kind of connection are you missing most right now?", false),
        ("Who's one person you could reach toward this week, even lightly?", false),
    ]),
    ("cancelled-plans", r"\bcancel(?:led|ed)?\s+(?:on\s+me|plans|again)\b|\bplans\s+fell\s+through\b|\bflaked\b", 2, &[
        ("Cancelled plans leave a strange empty room in the evening. How did you fill it?", false),
        ("Relieved or disappointed, or a bit of both?", false),
    ]),
    ("social-drain", r"\bpeopled[\s-]?out\b|\bsocial(?:ly)?\s+(?:drained|exhausted|battery)\b|\btoo\s+many\s+people\b", 2, &[
        ("Social energy is a real budget. What would genuine recharge look like tonight?", false),
        ("Which interactions fill you, and which only empty you out?", false),
    ]),

    // ── Sleep and rest ──────────────────────────────────────────────────────
    ("cant-sleep", r"\bcan['’]?t\s+(?:sleep|fall\s+asleep)\b|\binsomnia\b|\bwide\s+awake\b|\bup\s+all\s+night\b|\btossing\s+and\s+turning\b", 4, &[
        ("Sleepless nights make everything harder. What's your mind chewing on when the lights go out?", false),
        ("Is it trouble falling asleep, or staying there?", false),
        ("What does your wind-down actually look like, honestly?", false),
    ]),
    ("nightmares", r"\bnightmares?\b|\bbad\s+dreams?\b|\bwoke\s+up\s+(?:scared|panicked|in\s+a\s+sweat)\b", 3, &[
        ("Rough dreams leave residue on the whole morning. What lingered from this one?", false),
        ("Do the dreams rhyme with anything happening while you're awake?", false),
    ]),
    ("exhausted", r"\bexhaust(?:ed|ing)\b|\b(?:so|dead|completely)\s+tired\b|\bno\s+energy\b|\bdrained\b|\bwiped\s+out\b", 3, &[
        ("That's deep tiredness, not just a bad night. How long has it been building?", false),
        ("If rest were guilt-free, what would you do with an afternoon of it?", false),
        ("What's the biggest thief of your energy right now?", false),
    ]),
    ("cant-get-up", r"\boverslept\b|\bslept\s+(?:in|through|all\s+day|too\s+much)\b|\bcan['’]?t\s+get\s+(?:up|out\s+of\s+bed)\b", 3, &[
        ("Sometimes the body takes what it needs, and sometimes it's hiding. Which was this?", false),
        ("What's waiting on the other side of getting up that feels heavy?", false),
    ]),
    ("slept-well", r"\bslept\s+(?:well|great|better|good)\b|\bgood\s+(?:night['’]?s\s+)?sleep\b|\bwell[\s-]?rested\b", 2, &[
        ("A real night's sleep changes the whole texture of a day. What helped it happen?", false),
        ("What feels more possible today than it did yesterday?", false),
    ]),

    // ── Health ──────────────────────────────────────────────────────────────
    ("pain", r"\b(?:chronic\s+)?pain\b|\bmy\s+(?:back|neck|head|knee|stomach)\s+(?:hurts?|aches?|is\s+killing)\b|\bmigraines?\b|\bheadaches?\b", 3, &[
        ("Pain wears down patience for everything else. How are you pacing today around it?", false),
        ("What helps, even ten percent?", false),
        ("Has it changed, or is it the same grind as before?", false),
    ]),
    ("sick", r"\b(?:feeling|been|am|was|got)\s+sick\b|\bcaught\s+a\s+(?:cold|bug|flu)\b|\bunder\s+the\s+weather\b|\bfever\b", 2, &[
        ("Being sick shrinks the world to the next hour. Are you letting yourself actually rest?", false),
        ("What would kind recovery look like, instead of pushed-through recovery?", false),
    ]),
    ("medical-waiting", r"\b(?:doctor|physician|specialist)\b.*\b(?:results?|test|scan|waiting|nervous|scared|tomorrow)|\btest\s+results?\b|\bdiagnos\w*\b", 4, &[
        ("Waiting on medical answers is its own limbo. What's the fear saying, and what are the facts so far?", false),
        ("Uncertainty is often the heaviest symptom. How are you carrying it today?", false),
        ("What would help you feel accompanied in this, rather than alone?", false),
    ]),
    ("therapy", r"\btherap(?:y|ist)\b|\bcounsel(?:ing|or|lor)\b|\bpsychiatrist\b", 3, &[
        ("Working on yourself out loud takes courage. What came up in the room this time?", false),
        ("What are you noticing between sessions that you want to bring next time?", false),
    ]),
    ("medication", r"\bmedicat\w*\b|\bmeds\b|\bprescri\w*\b|\bdosage\b|\bside\s+effects?\b", 3, &[
        ("Adjusting to medication is a real process for the body and the self-image both. How has it been treating you?", false),
        ("What changes have you noticed, wanted or otherwise?", false),
    ]),
    ("panic", r"\bpanic\s+attacks?\b|\bcouldn['’]?t\s+breathe\b|\bheart\s+(?:was\s+)?racing\b|\bhyperventilat\w*\b", 5, &[
        ("Panic is terrifying, and it lies about danger. You got through it. Where were you when it hit?", false),
        ("What helps you find the ground again, even slightly?", false),
        ("Is this new, or has it been visiting more often lately?", false),
    ]),

    // ── Money ───────────────────────────────────────────────────────────────
    ("bills", r"\bbills?\b.*\b(?:pay|paying|due|pil|overdue|behind|afford)|\bcan['’]?t\s+afford\b|\bpaycheck\s+to\s+paycheck\b", 4, &[
        ("Money pressure hums under everything. Which bill is loudest right now?", false),
        ("What's one number that, if it changed, would let you exhale?", false),
    ]),
    ("debt", r"\bdebts?\b|\bcredit\s+cards?\b.*\b(?:balance|maxed|debt|interest)|\bloans?\b.*\b(?:student|pay|drowning|behind)|\bi\s+owe\b", 4, &[
        ("Debt sits on the chest even on good days. What would progress look like this month, not this decade?", false),
        ("Is the weight mostly the number, or what the number says about you? Those are different problems.", false),
    ]),
    ("housing-money", r"\brent\b.*\b(?:due|late|raise|increase|afford|behind)|\bmortgage\b|\bevict\w*\b", 4, &[
        ("Housing worry is survival-level stress, no wonder it's loud. What's the actual timeline you're facing?", false),
        ("Who or what could buy you some slack here?", false),
    ]),
    ("saving", r"\bsavings?\b|\bemergency\s+fund\b|\bnest\s+egg\b|\bput\s+away\s+money\b", 2, &[
        ("Building a cushion is slow, unglamorous self-respect. What are you saving toward?", false),
        ("What would feeling financially safe actually look like for you?", false),
    ]),
    ("overspent", r"\boverspen\w*\b|\bspent\s+too\s+much\b|\bimpulse\s+(?:buy|purchase|shopping)\b|\bretail\s+therapy\b", 2, &[
        ("Spending often soothes something first and costs something after. What was it soothing?", false),
        ("No shame spiral needed. What would repair look like, practically?", false),
    ]),
    ("money-fight", r"\b(?:fight|fought|argu\w*)\b.*\bmoney\b|\bmoney\b.*\b(?:fight|fought|argu\w*|tension)\b", 4, &[
        ("Money fights are rarely about money. What does it stand for, for each of you?", false),
        ("Where do your money stories come from, and how do they collide?", false),
    ]),

    // ── School ──────────────────────────────────────────────────────────────
    ("exams", r"\bexams?\b|\bmidterms?\b|\bfinals\s+(?:week|are|start)\b|\btest\s+(?:tomorrow|next|coming)\b|\bstudying\s+for\b", 3, &[
        ("Exam season compresses everything. What's the plan for the next two days, including rest?", false),
        ("Is the fear about the material, or about what the grade would mean?", false),
    ]),
    ("grades", r"\bgrades?\b|\bgpa\b|\bfailed\s+(?:a|the|my)\s+(?:test|exam|class|quiz)\b|\bbad\s+(?:grade|mark|score)\b", 3, &[
        ("One grade is a data point, not a verdict. What does it tell you about what to adjust?", false),
        ("Whose disappointment are you most bracing for, yours or someone else's?", false),
    ]),
    ("assignment", r"\b(?:assignment|essay|paper|homework|thesis|dissertation)s?\b.*\b(?:due|overdue|behind|stuck|procrastinat|blank)|\bhaven['’]?t\s+started\b", 3, &[
        ("A blank page plus a deadline is a particular dread. What's the smallest possible first move?", false),
        ("What's the block made of, confusion, perfectionism, or plain fatigue?", false),
    ]),
    ("professor", r"\b(?:professor|teacher|instructor|advisor)\b.*\b(?:unfair|harsh|ignor|rude|confus|scar|intimidat)|\boffice\s+hours\b", 2, &[
        ("Power differences make classroom friction harder to name. What happened?", false),
        ("What would advocating for yourself look like here?", false),
    ]),
    ("school-pressure", r"\b(?:school|college|university|classes)\b.*\b(?:overwhelm|pressure|too\s+much|drowning|behind|stress)", 3, &[
        ("School asks for proof of worth on a weekly schedule. Where's the pressure concentrated right now?", false),
        ("What would keeping up look like if you also got to stay human?", false),
    ]),

    // ── Emotions by name ────────────────────────────────────────────────────
    ("overwhelmed", r"\boverwhelm\w*\b|\btoo\s+much\s+at\s+once\b|\bdrowning\s+in\b|\bcan['’]?t\s+keep\s+up\b", 4, &[
        ("When everything is loud, nothing gets heard. If we sorted the pile, what's actually on top?", false),
        ("What's one thing on the list that's actually someone else's?", false),
        ("Overwhelm usually means too many open loops. Which one could you close or drop today?", false),
    ]),
    ("stressed", r"\bstress(?:ed|ing|ful)?\s+(?:about|over|with|by)\s+(.+)|\bstress(?:ed|ing|ful|ors?)?\b", 3, &[
        ("Stress about $1 hums in the background of everything else. Which part is loudest?", true),
        ("Where does the stress live in your body at the end of the day?", false),
        ("What's one stressor you could actually influence this week?", false),
    ]),
    ("anxious", r"\banxi(?:ous|ety)\b|\bworr(?:y|ied|ying)\b|\bon\s+edge\b|\bcan['’]?t\s+relax\b|\bdread(?:ing)?\b", 3, &[
        ("Anxiety rehearses futures that mostly never arrive. What's the scene it keeps playing for you?", false),
        ("Where does the worry live in your body right now?", false),
        ("What's one thing that's true and okay in this exact moment?", false),
    ]),
    ("angry", r"\b(?:angry|furious|livid|pissed(?:\s+off)?|enraged|fuming)\b|\bseeing\s+red\b", 3, &[
        ("That's real anger, and it's information. What boundary got crossed?", false),
        ("If the anger did its job perfectly, what would be different afterward?", false),
        ("What do you usually do with heat like this, and does it work?", false),
    ]),
    ("crying", r"\b(?:cried|crying|sobbed|sobbing|tears|teared\s+up)\b|\bso\s+sad\b|\bheartbroken\b", 4, &[
        ("Tears mean it matters, and they need no apology. What opened the gates?", false),
        ("After the crying passed, did you feel emptier or lighter?", false),
        ("What would comfort look like right now, from yourself or someone else?", false),
    ]),
    ("numb", r"\bnumb\b|\bfeel\s+nothing\b|\bempty\s+inside\b|\bgoing\s+through\s+the\s+motions\b|\bon\s+autopilot\b", 4, &[
        ("Numbness is often a fuse that blew to protect the circuit. What might have overloaded it?", false),
        ("When did you last feel something strongly, and what was it?", false),
    ]),
    ("guilt", r"\bguilty?\b|\bshould\s+have\b|\bshouldn['’]?t\s+have\b|\bmy\s+fault\b|\bblame\s+myself\b", 3, &[
        ("Guilt can be a signal or a habit. Which one is this, honestly?", false),
        ("If a friend did exactly what you did, what would you tell them?", false),
        ("What would making amends look like, to them or to yourself?", false),
    ]),
    ("shame", r"\bashamed\b|\bshame\b|\bembarrass(?:ed|ing|ment)\b|\bhumiliat\w*\b|\bmortif\w*\b", 4, &[
        ("Shame shrinks in daylight, and naming it here already loosened it a little. What's the hardest part to admit?", false),
        ("Whose eyes are you seeing yourself through right now?", false),
    ]),
    ("hopeless", r"\bhopeless\b|\bwhat['’]?s\s+the\s+point\b|\bno\s+point\b|\bnothing\s+will\s+change\b", 5, &[
        ("That's a heavy place to write from, and I'm glad you're putting it into words. What's drained the hope most?", false),
        ("Hopelessness tells a very convincing story. What's one small thing it might be wrong about?", false),
        ("You don't have to solve today. What would getting through the next hour gently look like?", false),
    ]),
    ("grateful", r"\bgrateful\b|\bgratitude\b|\bthankful\b|\bappreciat\w*\b|\bblessed\b|\blucky\s+to\b", 2, &[
        ("Gratitude noticed out loud doubles. What sits at the center of it today?", false),
        ("Who would love to know they made this list?", false),
    ]),
    ("proud", r"\bproud\s+of\s+(?:myself|me)\b|\bi\s+did\s+it\b|\bfinally\s+(?:finished|did|managed)\b|\baccomplish\w*\b|\bnailed\s+it\b", 3, &[
        ("Take the win fully. You earned it. What did it take that nobody else saw?", false),
        ("What does this prove to you about yourself?", false),
        ("How will you mark it, even in a small way?", false),
    ]),

    // ── Growth and habits ───────────────────────────────────────────────────
    ("habits", r"\bhabits?\b|\bstreaks?\b|\bevery\s+day\s+for\b|\broutines?\b.*\b(?:new|build|stick|broke|keep)", 2, &[
        ("Habits are votes for a version of you. What's this one voting for?", false),
        ("What makes it stick on the good days, and what breaks it on the bad ones?", false),
    ]),
    ("goals", r"\bgoals?\b|\bresolutions?\b|\bmilestones?\b|\bworking\s+toward\b", 2, &[
        ("A goal named is a goal half-scheduled. What's the very next physical action?", false),
        ("Why this goal, and why now?", false),
    ]),
    ("procrastinating", r"\bprocrastinat\w*\b|\bputting\s+(?:it|things|this)\s+off\b|\bkeep\s+avoiding\b|\bcan['’]?t\s+get\s+started\b", 2, &[
        ("Procrastination is rarely laziness. Usually it's friction or fear. Which is it here?", false),
        ("What's the five-minute ugly-first-draft version of starting?", false),
    ]),
    ("unmotivated", r"\bmotivat\w*\b|\bno\s+drive\b|\bdon['’]?t\s+feel\s+like\s+doing\b|\bzero\s+energy\s+for\b", 2, &[
        ("Motivation follows action more often than it leads it. What's the smallest honest start?", false),
        ("Is the tank empty, or is the destination wrong?", false),
    ]),
    ("failed", r"\bfail(?:ed|ure|ing)\b|\bscrewed\s+(?:up|it)\b|\bmessed\s+(?:up|it\s+up)\b|\bblew\s+it\b", 4, &[
        ("Failing at a thing and being a failure are different claims. Which story are you telling?", false),
        ("What did this attempt teach you that the sideline never could?", false),
        ("What would a kind retry look like?", false),
    ]),
    ("crossroads", r"\bbig\s+(?:change|decision)\b|\bcrossroads\b|\bturning\s+point\b|\bdecid(?:e|ing)\s+(?:whether|between|if)\b|\bshould\s+i\b", 3, &[
        ("Big decisions deserve more than pro-con lists. What does your gut say before the spreadsheet?", false),
        ("If the decision were already made for you, which outcome would you secretly hope for?", false),
    ]),

    // ── Daily life ──────────────────────────────────────────────────────────
    ("moving-house", r"\bmov(?:e|ing|ed)\s+(?:to|out|in|across|away)\b|\bpacking\s+boxes\b|\bnew\s+(?:apartment|house|city|place)\b", 3, &[
        ("Moving uproots more than furniture. What are you most hoping the new place gives you?", false),
        ("What will you miss that you didn't expect to?", false),
    ]),
    ("trip", r"\btravel(?:ing|led|ed)?\b|\btrips?\b|\bvacation\b|\bflights?\b|\broad\s+trip\b", 2, &[
        ("Getting away rearranges the head. What do you want this time away to give you?", false),
        ("What from out there would you like to smuggle back into ordinary life?", false),
    ]),
    ("gray-weather", r"\b(?:rain(?:y|ing)?|gloomy|gray|grey|dark)\s+(?:day|weather|outside|morning)\b|\bweather\b.*\b(?:mood|depress|gloomy|down)", 1, &[
        ("Weather gets a vote on mood whether we like it or not. What would warm the day from the inside?", false),
        ("Gray outside doesn't have to run the whole show. What's one bright spot you can make?", false),
    ]),
    ("eating", r"\b(?:ate|overate|binged)\b|\bskipped\s+(?:breakfast|lunch|dinner|meals?)\b|\bcomfort\s+food\b|\bjunk\s+food\b|\bcook(?:ed|ing)\b", 2, &[
        ("Food and feelings share a table. What was the meal doing for you besides feeding you?", false),
        ("What would eating kindly look like tomorrow? No rules, just kindness.", false),
    ]),
    ("moved-body", r"\b(?:worked|working)\s+out\b|\bgym\b|\blifted\b|\b(?:went\s+for\s+a|morning|evening)\s+(?:run|jog|walk)\b|\byoga\b", 2, &[
        ("Moving the body moves the mind. How did you feel after, compared to before?", false),
        ("What got you out the door today, discipline or desire?", false),
        ("Where did your head go while you moved?", false),
    ]),
    ("pet", r"\bmy\s+(?:dog|cat|puppy|kitten|pet)\b\s*(.*)", 2, &[
        ("So they $1. They tend to know when it matters. What was that like?", true),
        ("Animals keep us honest about the present moment. What did yours pull you into today?", false),
        ("Pets ask so little and anchor so much. What does yours give you on the hard days?", false),
    ]),
    ("marked-day", r"\bbirthdays?\b|\bholidays?\s+(?:coming|season|alone|dread)\b|\bchristmas\b|\bthanksgiving\b|\bnew\s+year\b", 2, &[
        ("Marked days carry expectations ordinary days don't. What do you want this one to actually be?", false),
        ("How do you feel about it arriving, honestly?", false),
    ]),
    ("world-news", r"\bthe\s+news\b|\bdoomscroll\w*\b|\bheadlines?\b|\b(?:election|politics|war)\b.*\b(?:anxious|worried|can['’]?t\s+stop|overwhelm|angry|scared)", 3, &[
        ("The world's volume is turned way up. What's one input you could turn down this week?", false),
        ("Carrying global weight personally wears you down. Where could that concern become one small action?", false),
    ]),

    // ── Grief and loss ──────────────────────────────────────────────────────
    ("bereavement", r"\b(?:died|passed\s+away|funeral|burial|memorial)\b|\blost\s+(?:my|our)\s+(?:mom|dad|mother|father|grandm\w*|grandp\w*|brother|sister|friend|husband|wife|partner|dog|cat)\b", 5, &[
        ("I'm so sorry. Grief has no schedule and needs no permission. What do you want to remember out loud right now?", false),
        ("There's no right way to do this. What has today been like, hour by hour?", false),
        ("What would honoring them look like this week, in some small way?", false),
    ]),
    ("grieving", r"\bgrief\b|\bgrieving\b|\bmourning\b|\bstill\s+miss(?:ing)?\s+(?:him|her|them)\b", 5, &[
        ("Grief comes in waves because love doesn't end on a date. What set off this one?", false),
        ("What did they give you that you're still carrying?", false),
    ]),
    ("loss-anniversary", r"\b(?:one|two|three|a)\s+years?\s+(?:since|ago\s+today)\b|\banniversary\s+of\b|\bwould\s+have\s+been\s+(?:his|her|their)\b", 4, &[
        ("Anniversaries collapse time. However today feels is allowed. What's rising up?", false),
        ("How do you want to spend the remembering, alone, with someone, or marking it somehow?", false),
    ]),
    ("empty-chair", r"\bwish\s+(?:he|she|they)\s+(?:was|were)\s+(?:here|still\s+here)\b|\bempty\s+(?:chair|seat|side\s+of\s+the\s+bed)\b", 5, &[
        ("That absence has a shape. Tell me about them, if you'd like.", false),
        ("What would you say to them, if you could have ten more minutes?", false),
    ]),

    // ── Time pressure ───────────────────────────────────────────────────────
    ("no-time", r"\bno\s+time\s+(?:for|to)\b|\bnot\s+enough\s+hours\b|\btime\s+(?:slips|flies|disappears)\b|\bwhere\s+did\s+the\s+(?:day|week|time)\s+go\b", 2, &[
        ("Time doesn't disappear, it gets spent invisibly. Where do you suspect it's going?", false),
        ("What would you protect first if you could fence off one hour a day?", false),
    ]),
    ("everything-at-once", r"\beverything\s+(?:at\s+once|is\s+happening|all\s+at\s+once|piling\s+up)\b|\ball\s+at\s+the\s+same\s+time\b", 3, &[
        ("Everything at once means nothing gets your full self. What genuinely can't wait until next week?", false),
        ("If you could freeze all of it for one day, what would you do with the stillness?", false),
    ]),
    ("falling-behind", r"\b(?:so|falling|always)\s+behind\b|\bplaying\s+catch[\s-]?up\b|\bbacklog\b", 2, &[
        ("Behind implies a schedule someone set. Who set this one, and do you agree with it?", false),
        ("What would caught-up look like, and is it actually worth the sprint?", false),
    ]),
    ("busy", r"\b(?:so|crazy|insanely|too)\s+busy\b|\bnon[\s-]?stop\b|\bno\s+breaks?\b", 2, &[
        ("Busy can be full or can be frantic. Which flavor was today?", false),
        ("What would you cancel if cancelling carried no guilt?", false),
    ]),

    // ── Questions the writer asks ───────────────────────────────────────────
    ("what-to-do", r"\bwhat\s+should\s+i\s+do\b|\bwhat\s+do\s+i\s+do\b|\bany\s+advice\b", 2, &[
        ("You likely know more than you think. If you had to answer your own question, what would you say first?", false),
        ("Before what to do, what do you want? Those are different questions.", false),
    ]),
    ("is-it-normal", r"\bis\s+(?:it|this|that)\s+normal\b|\bam\s+i\s+(?:crazy|overreacting|too\s+sensitive|the\s+problem)\b", 3, &[
        ("Wanting to be normal is really wanting to be okay. Your reaction makes sense given what you wrote.", false),
        ("What would change for you if the answer were simply yes, it's normal?", false),
    ]),
    ("why-do-i", r"\bwhy\s+do\s+i\s+(.+)", 2, &[
        ("You keep asking why you $1. What answer are you afraid it might be?", true),
        ("Sometimes why matters less than what now. Which question serves you better today?", false),
    ]),
];

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn all_rule_patterns_compile() {
        let rules = build_rules();
        assert!(rules.len() >= 100, "rule table shrank to {}", rules.len());
    }

    #[test]
    fn rule_keys_are_unique() {
        let rules = build_rules();
        for (i, a) in rules.iter().enumerate() {
            for b in rules.iter().skip(i + 1) {
                assert_ne!(a.key, b.key, "duplicate rule key {}", a.key);
            }
        }
    }

    #[test]
    fn every_rule_keeps_a_capture_free_variant() {
        for (key, _, _, variants) in RULE_TABLE {
            assert!(
                variants.iter().any(|(_, needs_capture)| !needs_capture),
                "rule {key} has no capture-free variant"
            );
            assert!(!variants.is_empty(), "rule {key} has no variants");
        }
    }

    #[test]
    fn capture_templates_carry_a_placeholder() {
        for (key, _, _, variants) in RULE_TABLE {
            for (template, needs_capture) in *variants {
                if *needs_capture {
                    assert!(
                        template.contains("$1"),
                        "rule {key} capture template lacks $1: {template}"
                    );
                } else {
                    assert!(
                        !template.contains("$1"),
                        "rule {key} plain template contains $1: {template}"
                    );
                }
            }
        }
    }

    #[test]
    fn specificity_reflects_capture_groups() {
        let rules = build_rules();
        let feel_like = rules.iter().find(|r| r.key == "feel-like").unwrap();
        assert_eq!(feel_like.specificity, feel_like.weight + 1);
        let burnout = rules.iter().find(|r| r.key == "burnout").unwrap();
        assert_eq!(burnout.specificity, burnout.weight);
    }

    #[test]
    fn weights_stay_in_salience_band() {
        for (key, _, weight, _) in RULE_TABLE {
            assert!((1..=5).contains(weight), "rule {key} weight {weight} out of band");
        }
    }

    #[test]
    fn grief_rules_outweigh_small_talk() {
        let rules = build_rules();
        let grief = rules.iter().find(|r| r.key == "bereavement").unwrap();
        let weather = rules.iter().find(|r| r.key == "gray-weather").unwrap();
        assert!(grief.weight > weather.weight);
    }

    #[test]
    fn boss_pattern_captures_the_complaint() {
        let rules = build_rules();
        let boss = rules.iter().find(|r| r.key == "boss-does").unwrap();
        let caps = boss
            .pattern
            .captures("my manager keeps adding more projects")
            .unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "keeps adding more projects");
    }

    #[test]
    fn stressed_pattern_captures_only_with_a_preposition() {
        let rules = build_rules();
        let stressed = rules.iter().find(|r| r.key == "stressed").unwrap();
        let with_topic = stressed.pattern.captures("i am stressed about money").unwrap();
        assert_eq!(with_topic.get(1).unwrap().as_str(), "money");
        let bare = stressed.pattern.captures("today was stressful").unwrap();
        assert!(bare.get(1).is_none());
    }

    #[test]
    fn contraction_patterns_accept_both_apostrophe_forms() {
        let rules = build_rules();
        let sleep = rules.iter().find(|r| r.key == "cant-sleep").unwrap();
        assert!(sleep.pattern.is_match("i can't sleep again"));
        assert!(sleep.pattern.is_match("i can’t sleep again"));
        assert!(sleep.pattern.is_match("i cant sleep again"));
    }
}
