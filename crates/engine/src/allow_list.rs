// crates/engine/src/allow_list.rs
use hashbrown::HashSet;

/// Domain labels that get a dedicated `<label>.txt` output.
pub const BUILTIN_DOMAINS: [&str; 45] = [
    "aliceadsl",
    "bellsouth",
    "bigpond",
    "bluewin",
    "blueyonder",
    "centurytel",
    "charter",
    "chello",
    "club-internet",
    "comcast",
    "earthlink",
    "facebook",
    "freenet",
    "frontiernet",
    "gmail",
    "googlemail",
    "hetnet",
    "hotmail",
    "laposte",
    "libero",
    "mail",
    "ntlworld",
    "optonline",
    "optusnet",
    "orange",
    "outlook",
    "planet",
    "rambler",
    "rediffmail",
    "rocketmail",
    "sbcglobal",
    "skynet",
    "sympatico",
    "t-online",
    "telenet",
    "tiscali",
    "verizon",
    "virgilio",
    "voila",
    "wanadoo",
    "windstream",
    "yahoo",
    "yandex",
    "zonnet",
    "zoho",
];

/// Immutable set of lowercase domain labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    labels: HashSet<String>,
}

impl AllowList {
    /// Build an allow-list from arbitrary labels. Labels are lowercased.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|l| l.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// The compiled-in provider list.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_DOMAINS)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::builtin()
    }
}
