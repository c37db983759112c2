//! Known-answer vectors shared by unit tests. Never use these keys outside tests.

/// SEC1 DER private key captured from an earlier manual run.
pub const PRIVATE_KEY_SEC1_DER: &str = "30770201010420270623da3768df6fc3c3439b8e0319621318b1dec6199052f49faefdd9d80548a00a06082a8648ce3d030107a1440342000462ded99b11da850eec19a908aa57effbec88541aa04da07d0a2cabf046b2502dd061eccc9860c7922ea758a2e8ac1e5f6d044d7a6af03060aa5dcb13cafc8a73";

pub const PUBLIC_KEY_COMPRESSED: &str =
    "0362ded99b11da850eec19a908aa57effbec88541aa04da07d0a2cabf046b2502d";

/// SHA-256("i love you").
pub const MESSAGE_DIGEST: &str = "1c5863cd55b5a4413fd59f054af57ba3c75c0698b3851d70f99b8de2d5c7338f";

/// r || s over `MESSAGE_DIGEST` by `PRIVATE_KEY_SEC1_DER`.
pub const SIGNATURE: &str = "6d56582490ff9a54b44df6bf9fa991c0432f2fd25f32760bf540b10049b50a048ca986d7e9f0ee7745bce735dcd0db951f21664f054e94b0a03d87046857a3ca";

/// RFC 6979 A.2.5: P-256, SHA-256, message "sample".
pub const RFC6979_PRIVATE_KEY: &str =
    "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";
pub const RFC6979_SIGNATURE: &str = "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8";
