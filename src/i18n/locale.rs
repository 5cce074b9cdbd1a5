use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Self::Es, Self::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Exact match used for URL segments and persisted values.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim().to_lowercase().as_str())
            .ok_or_else(|| format!("unsupported locale: {}", s))
    }
}

/// Language encoded in the leading path segment, e.g. `/en/menu`.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let first = path.trim_start_matches('/').split('/').next()?;
    Locale::from_code(first)
}

/// Persisted preference first, then the URL, then the configured default.
pub fn resolve_locale(
    persisted: Option<&str>,
    url_path: Option<&str>,
    default: Locale,
) -> Locale {
    persisted
        .and_then(|value| Locale::from_code(value.trim()))
        .or_else(|| url_path.and_then(locale_from_path))
        .unwrap_or(default)
}

/// Rewrites `current_path` so it points at the same page in `locale`.
///
/// The root and unprefixed paths gain a prefix, an existing language prefix
/// is replaced, `/admin` paths are not localized and come back as they were.
/// Any query string is carried over untouched.
pub fn switch_locale_path(current_path: &str, locale: Locale) -> String {
    let (path, query) = match current_path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (current_path, None),
    };

    let rest = path.strip_prefix('/').unwrap_or(path);
    let (first, tail) = match rest.split_once('/') {
        Some((first, tail)) => (first, Some(tail)),
        None => (rest, None),
    };

    let mut out = if first == "admin" {
        format!("/{}", rest)
    } else if rest.is_empty() {
        format!("/{}", locale)
    } else if Locale::from_code(first).is_some() {
        match tail {
            Some(tail) => format!("/{}/{}", locale, tail),
            None => format!("/{}", locale),
        }
    } else {
        format!("/{}/{}", locale, rest)
    };

    if let Some(query) = query {
        out.push('?');
        out.push_str(query);
    }

    out
}
