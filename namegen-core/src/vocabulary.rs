use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NameGenError;

/// Grammatical category of a vocabulary word.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyCategory {
	Noun,
	Verb,
	Adjective,
	Adverb,
}

impl VocabularyCategory {
	/// Every category, in declaration order.
	pub const ALL: [VocabularyCategory; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

	/// Accepted textual tags, in the same order as [`Self::ALL`].
	pub const TAGS: &'static [&'static str] = &["noun", "verb", "adjective", "adverb"];

	/// Returns the canonical lowercase tag.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Noun => "noun",
			Self::Verb => "verb",
			Self::Adjective => "adjective",
			Self::Adverb => "adverb",
		}
	}
}

impl fmt::Display for VocabularyCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for VocabularyCategory {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tag = s.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|category| category.as_str() == tag)
			.ok_or_else(|| NameGenError::InvalidOption {
				option: "category",
				value: s.to_owned(),
				accepted: Self::TAGS,
			})
	}
}

/// Read-only store of categorized word lists.
///
/// # Invariants
/// - Every word is a lowercase ASCII token.
/// - The built-in lists are never empty; custom lists may be, in which case
///   selection fails with [`NameGenError::EmptyVocabulary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
	nouns: &'static [&'static str],
	verbs: &'static [&'static str],
	adjectives: &'static [&'static str],
	adverbs: &'static [&'static str],
}

impl Vocabulary {
	/// Creates a vocabulary from custom word lists.
	pub const fn new(
		nouns: &'static [&'static str],
		verbs: &'static [&'static str],
		adjectives: &'static [&'static str],
		adverbs: &'static [&'static str],
	) -> Self {
		Self { nouns, verbs, adjectives, adverbs }
	}

	/// Returns the curated Star Wars themed vocabulary.
	pub const fn builtin() -> Self {
		Self::new(NOUNS, VERBS, ADJECTIVES, ADVERBS)
	}

	/// Returns the words of a category, in their stored order.
	pub fn words_for(&self, category: VocabularyCategory) -> &'static [&'static str] {
		match category {
			VocabularyCategory::Noun => self.nouns,
			VocabularyCategory::Verb => self.verbs,
			VocabularyCategory::Adjective => self.adjectives,
			VocabularyCategory::Adverb => self.adverbs,
		}
	}

	/// Total number of words across all categories.
	pub fn len(&self) -> usize {
		VocabularyCategory::ALL.iter().map(|c| self.words_for(*c).len()).sum()
	}

	/// Returns `true` if every category is empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for Vocabulary {
	fn default() -> Self {
		Self::builtin()
	}
}

// Ships, factions, ranks, planets, creatures, droids, weapons, places, people.
const NOUNS: &[&str] = &[
	"falcon", "destroyer", "xwing", "tiefighter", "awing", "bwing", "ywing",
	"interceptor", "bomber", "starfighter", "cruiser", "frigate", "corvette",
	"dreadnought", "walker", "speeder", "transport", "shuttle", "gunship",
	"executor", "outrider",
	"empire", "rebel", "alliance", "republic", "confederacy", "resistance",
	"separatist", "federation", "syndicate",
	"jedi", "sith", "force", "padawan", "knight", "master", "lord",
	"apprentice", "inquisitor", "guardian", "consular", "sentinel",
	"acolyte", "initiate", "youngling",
	"commander", "admiral", "general", "captain", "lieutenant", "sergeant",
	"major", "colonel", "marshal", "moff", "warlord",
	"trooper", "soldier", "pilot", "navigator", "gunner", "engineer",
	"scout", "ranger", "commando", "operative", "agent", "spy",
	"tatooine", "hoth", "endor", "dagobah", "coruscant", "naboo",
	"alderaan", "yavin", "bespin", "kamino", "geonosis", "mustafar",
	"kashyyyk", "mandalore", "dathomir", "ryloth", "corellia",
	"jakku", "scarif", "jedha", "eadu", "crait", "exegol",
	"korriban", "moraband", "dantooine",
	"wookiee", "ewok", "hutt", "rodian", "twilek", "togruta", "zabrak",
	"rancor", "wampa", "tauntaun", "bantha", "dewback", "nexu", "reek",
	"acklay", "sarlacc", "mynock", "porg", "purrgil", "exogorth", "rathtar",
	"varactyl",
	"droid", "astromech", "protocol",
	"lightsaber", "blaster", "bowcaster", "vibroblade", "electrostaff",
	"turbolaser", "disruptor", "slugthrower",
	"temple", "citadel", "fortress", "stronghold", "bastion", "sanctuary",
	"academy", "enclave", "monastery", "palace", "cathedral",
	"base", "outpost", "station", "garrison", "bunker", "depot",
	"cantina", "hangar", "bay", "dock", "spaceport", "starport",
	"arena", "colosseum", "pit", "chamber",
	"holocron", "vergence", "nexus", "wellspring",
	"fleet", "armada", "squadron", "wing", "flight", "battalion",
	"legion", "company", "platoon", "squad", "cell", "sector",
	"system", "cluster", "expanse", "nebula", "hyperspace", "parsec",
	"senate", "council", "tribunal", "assembly", "conclave",
	"chancellor", "senator", "emperor", "queen", "king", "prince",
	"princess", "duchess", "viceroy", "governor", "prefect",
	"smuggler", "scavenger", "hunter", "mercenary",
	"pirate", "raider", "marauder", "scoundrel", "rogue",
	"skywalker", "solo", "organa", "kenobi", "vader", "palpatine",
	"maul", "dooku", "grievous", "tarkin", "thrawn", "veers",
	"binks", "fett", "calrissian", "antilles", "ackbar", "mothma",
];

// Regular verbs only: the past-tense transform has no irregular table.
const VERBS: &[&str] = &[
	"attack", "defend", "assault", "charge", "rush", "flank", "ambush", "raid",
	"siege", "blockade", "bombard", "strafe", "duel", "parry", "counter",
	"feint", "pierce", "slash", "sever",
	"scout", "observe", "monitor", "hunt", "pursue",
	"chase", "track", "trail", "follow", "evade", "escape", "withdraw",
	"retreat", "disengage", "infiltrate", "penetrate", "breach", "invade",
	"occupy", "secure", "sabotage", "disrupt", "corrupt", "deploy",
	"mobilize", "position", "station", "garrison", "engage", "encounter",
	"confront", "challenge", "oppose", "advance", "push", "surge", "storm",
	"levitate", "lift", "pull", "choke", "persuade", "influence", "dominate",
	"manipulate", "predict", "sense", "perceive", "detect", "discern",
	"meditate", "commune", "attune", "harmonize", "balance",
	"heal", "restore", "revitalize", "rejuvenate", "mend",
	"absorb", "dissipate", "nullify", "negate", "resist",
	"channel", "focus", "concentrate", "amplify", "project",
	"deflect", "reflect", "redirect", "block",
	"augment", "enhance", "empower", "strengthen", "fortify",
	"command", "order", "direct", "coordinate", "organize",
	"guide", "spearhead", "rally", "inspire", "motivate",
	"obey", "serve", "comply", "defy", "surrender", "yield", "capitulate",
	"concede", "negotiate", "bargain", "parley", "arbitrate",
	"pilot", "navigate", "steer", "maneuver", "helm",
	"soar", "glide", "dive", "climb", "land", "dock", "berth", "anchor",
	"ground", "launch", "ascend", "jump", "warp",
	"hack", "slice", "crack", "bypass",
	"decode", "decrypt", "decipher", "translate",
	"encrypt", "encode", "scramble",
	"repair", "fix", "patch", "construct", "assemble", "fabricate", "engineer",
	"calibrate", "tune", "adjust", "optimize", "configure",
	"probe", "search", "survey",
	"identify", "recognize", "pinpoint", "trace", "locate", "discover",
	"analyze", "examine", "inspect", "investigate", "study",
	"calculate", "compute", "process", "determine",
	"signal", "relay", "communicate",
	"fire", "blast", "discharge", "volley",
	"electrify", "shock", "jolt",
	"immobilize", "paralyze", "disable",
	"scorch", "incinerate", "vaporize",
	"explode", "detonate", "rupture",
	"implode", "collapse", "crush", "compress",
	"shatter", "fragment", "splinter",
	"ignite", "kindle", "spark",
	"extinguish", "quench", "douse", "snuff",
	"activate", "trigger", "initiate",
	"deactivate", "terminate",
	"cloak", "conceal", "mask", "shroud",
	"phase", "shift", "distort",
	"smuggle",
	"scavenge", "salvage", "reclaim", "recover", "retrieve",
	"trade", "barter", "exchange", "transact",
	"shield", "protect", "guard", "safeguard",
	"armor", "reinforce", "harden",
	"entrench", "barricade",
	"warn", "alert", "notify", "advise",
];

const ADJECTIVES: &[&str] = &[
	"imperial", "rebel", "republic", "separatist", "mandalorian", "jedi",
	"sith", "grey", "balanced", "neutral", "independent",
	"prescient", "telepathic", "empathic", "clairvoyant", "prophetic",
	"enlightened", "corrupted", "tempted", "fallen", "redeemed",
	"meditative", "contemplative", "mindful", "aware",
	"galactic", "planetary", "stellar", "cosmic", "universal",
	"quadrant", "regional", "local",
	"solar", "lunar", "orbital", "atmospheric",
	"quantum", "hyper", "ultra", "mega", "super", "turbo",
	"advanced", "primitive", "ancient", "archaic", "obsolete", "deprecated",
	"prototype", "experimental", "beta", "alpha", "standard", "civilian",
	"commercial",
	"stealth", "cloaked", "invisible", "phased", "shadow",
	"covert", "classified", "secret", "confidential",
	"hidden", "concealed", "masked", "shrouded", "veiled",
	"dark", "light", "bright", "dim", "luminous", "radiant",
	"crimson", "scarlet", "ruby",
	"azure", "cobalt", "sapphire", "cerulean",
	"emerald", "jade", "verdant", "viridian",
	"golden", "amber", "gilt",
	"silver", "argent", "platinum", "chrome",
	"bronze", "copper", "brass", "rust",
	"iron", "steel", "titanium", "durasteel", "beskar",
	"obsidian", "onyx", "ebon",
	"primordial", "legendary", "mythical", "fabled", "storied",
	"epic", "monumental", "historic", "forgotten", "lost",
	"heroic", "valiant", "gallant", "courageous", "brave",
	"noble", "honorable", "virtuous", "righteous",
	"loyal", "faithful", "devoted", "steadfast", "wise", "sage",
	"ruthless", "merciless", "cruel", "vicious", "brutal",
	"savage", "feral", "cunning", "devious", "scheming", "treacherous",
	"sly", "crafty", "wily", "shrewd",
	"infamous", "notorious", "feared", "dreaded",
	"tactical", "strategic", "elite", "veteran", "seasoned", "rookie",
	"swift", "rapid", "quick", "fast", "lightning",
	"blazing", "supersonic", "hypersonic",
	"agile", "nimble",
	"powerful", "mighty", "potent", "formidable",
	"strong", "robust", "sturdy", "stalwart",
	"massive", "colossal", "gigantic", "enormous", "titanic",
	"heavy", "tiny", "compact",
	"mysterious", "enigmatic", "cryptic", "arcane",
	"esoteric", "mystical", "unknown", "uncharted",
	"lawful", "disciplined", "chaotic", "wild", "untamed",
	"rogue", "maverick", "free", "outlaw",
];

const ADVERBS: &[&str] = &[
	"swiftly", "rapidly", "quickly", "speedily", "hastily",
	"slowly", "gradually", "steadily", "patiently", "methodically",
	"instantly", "immediately", "suddenly", "abruptly", "spontaneously",
	"stealthily", "silently", "quietly", "noiselessly", "soundlessly",
	"covertly", "secretly", "clandestinely", "surreptitiously",
	"subtly", "discreetly", "inconspicuously", "unobtrusively",
	"loudly", "thunderously", "deafeningly", "resoundingly",
	"softly", "gently", "delicately", "tenderly", "lightly",
	"intensely", "fervently", "passionately", "zealously", "ardently",
	"fiercely", "ferociously", "savagely", "viciously", "violently",
	"brutally", "ruthlessly", "mercilessly", "remorselessly",
	"aggressively", "belligerently", "combatively", "militantly",
	"cunningly", "cleverly", "shrewdly", "astutely", "sagaciously",
	"slyly", "craftily", "artfully", "deceptively", "deviously",
	"wisely", "prudently", "judiciously", "sensibly", "rationally",
	"heroically", "valiantly", "courageously", "bravely", "gallantly",
	"nobly", "honorably", "virtuously", "righteously", "justly",
	"shamefully", "dishonorably", "ignominiously", "disgracefully",
	"mysteriously", "enigmatically", "cryptically", "inscrutably",
	"eerily", "uncannily", "strangely", "oddly", "peculiarly",
	"tactically", "strategically", "operationally",
	"systematically", "precisely", "accurately", "exactly", "perfectly",
	"carelessly", "haphazardly", "recklessly", "rashly", "impulsively",
	"openly", "overtly", "publicly", "blatantly", "flagrantly",
	"privately", "confidentially", "intimately",
	"efficiently", "effectively", "productively", "optimally",
	"masterfully", "expertly", "skillfully", "adeptly", "deftly",
	"clumsily", "awkwardly", "ineptly", "incompetently",
	"powerfully", "mightily", "forcefully", "vigorously", "energetically",
	"strongly", "robustly", "stoutly", "heartily",
	"weakly", "feebly", "limply", "languidly",
	"determinedly", "resolutely", "steadfastly", "unwaveringly",
	"persistently", "doggedly", "tenaciously", "stubbornly",
	"reluctantly", "hesitantly", "tentatively", "uncertainly",
];
