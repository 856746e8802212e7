use crate::domain::error::CoerceError;
use cid::Cid;
use multibase::Base;
use std::fmt;
use std::str::FromStr;

/// Registered multibase encodings, keyed by the names clients send as `cid-base`.
static REGISTERED_BASES: &[(&str, Base)] = &[
    ("identity", Base::Identity),
    ("base2", Base::Base2),
    ("base8", Base::Base8),
    ("base10", Base::Base10),
    ("base16", Base::Base16Lower),
    ("base16upper", Base::Base16Upper),
    ("base32hex", Base::Base32HexLower),
    ("base32hexupper", Base::Base32HexUpper),
    ("base32hexpad", Base::Base32HexPadLower),
    ("base32hexpadupper", Base::Base32HexPadUpper),
    ("base32", Base::Base32Lower),
    ("base32upper", Base::Base32Upper),
    ("base32pad", Base::Base32PadLower),
    ("base32padupper", Base::Base32PadUpper),
    ("base32z", Base::Base32Z),
    ("base36", Base::Base36Lower),
    ("base36upper", Base::Base36Upper),
    ("base58btc", Base::Base58Btc),
    ("base58flickr", Base::Base58Flickr),
    ("base64", Base::Base64),
    ("base64pad", Base::Base64Pad),
    ("base64url", Base::Base64Url),
    ("base64urlpad", Base::Base64UrlPad),
];

pub fn registered_names() -> impl Iterator<Item = &'static str> {
    REGISTERED_BASES.iter().map(|(name, _)| *name)
}

pub fn is_registered(name: &str) -> bool {
    REGISTERED_BASES.iter().any(|(registered, _)| *registered == name)
}

/// A multibase encoding selected by its registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseName {
    name: &'static str,
    base: Base,
}

impl FromStr for BaseName {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTERED_BASES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(name, base)| Self {
                name: *name,
                base: *base,
            })
            .ok_or_else(|| CoerceError::InvalidBaseName(s.to_string()))
    }
}

impl BaseName {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// Render `cid` in this encoding. CIDv0 only supports `base58btc`.
    pub fn encode_cid(&self, cid: &Cid) -> Result<String, cid::Error> {
        cid.to_string_of_base(self.base)
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
