use super::models::FontAsset;

pub(crate) const GENERIC_FALLBACK: &str = "sans-serif";
pub(crate) const AUTO_FALLBACK_CJK_SC: &[&str] = &[
    "Noto Sans SC",
    "Noto Sans CJK SC",
    "Source Han Sans SC",
    "PingFang SC",
    "Microsoft YaHei",
    "WenQuanYi Zen Hei",
];
pub(crate) const AUTO_FALLBACK_CJK_TC: &[&str] = &[
    "Noto Sans TC",
    "Noto Sans CJK TC",
    "Source Han Sans TC",
    "PingFang TC",
    "Microsoft JhengHei",
];
pub(crate) const AUTO_FALLBACK_CJK_HK: &[&str] = &[
    "Noto Sans HK",
    "Noto Sans CJK HK",
    "Source Han Sans HK",
    "PingFang HK",
    "Microsoft JhengHei",
];
pub(crate) const AUTO_FALLBACK_CJK_JP: &[&str] = &[
    "Noto Sans JP",
    "Noto Sans CJK JP",
    "Source Han Sans JP",
    "Hiragino Sans",
    "Yu Gothic",
    "Meiryo",
    "MS Gothic",
];
pub(crate) const AUTO_FALLBACK_CJK_KR: &[&str] = &[
    "Noto Sans KR",
    "Noto Sans CJK KR",
    "Source Han Sans KR",
    "Apple SD Gothic Neo",
    "Malgun Gothic",
];
pub(crate) const AUTO_FALLBACK_GLOBAL: &[&str] = &["Noto Sans", "Segoe UI", "Arial Unicode MS"];
/// Common installed sans faces tried when no configured family is present.
pub(crate) const AUTO_FALLBACK_SANS: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
    "Cantarell",
];
pub(crate) const AUTO_FALLBACK_EMOJI: &[&str] =
    &["Apple Color Emoji", "Segoe UI Emoji", "Noto Color Emoji"];
pub(crate) const NOTO_EMOJI: FontAsset = FontAsset {
    filename: "NotoColorEmoji.ttf",
    urls: &[
        "https://raw.githubusercontent.com/googlefonts/noto-emoji/main/fonts/NotoColorEmoji.ttf",
        "https://raw.githubusercontent.com/notofonts/noto-emoji/main/fonts/NotoColorEmoji.ttf",
    ],
};
pub(crate) const NOTO_CJK_SC_BOLD: FontAsset = FontAsset {
    filename: "NotoSansCJKsc-Bold.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/SimplifiedChinese/NotoSansCJKsc-Bold.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/SimplifiedChinese/NotoSansCJKsc-Bold.otf",
    ],
};
pub(crate) const NOTO_CJK_SC_BLACK: FontAsset = FontAsset {
    filename: "NotoSansCJKsc-Black.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/SimplifiedChinese/NotoSansCJKsc-Black.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/SimplifiedChinese/NotoSansCJKsc-Black.otf",
    ],
};
pub(crate) const NOTO_CJK_TC_BOLD: FontAsset = FontAsset {
    filename: "NotoSansCJKtc-Bold.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/TraditionalChinese/NotoSansCJKtc-Bold.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/TraditionalChinese/NotoSansCJKtc-Bold.otf",
    ],
};
pub(crate) const NOTO_CJK_TC_BLACK: FontAsset = FontAsset {
    filename: "NotoSansCJKtc-Black.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/TraditionalChinese/NotoSansCJKtc-Black.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/TraditionalChinese/NotoSansCJKtc-Black.otf",
    ],
};
pub(crate) const NOTO_CJK_HK_BOLD: FontAsset = FontAsset {
    filename: "NotoSansCJKhk-Bold.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/HongKong/NotoSansCJKhk-Bold.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/HongKong/NotoSansCJKhk-Bold.otf",
    ],
};
pub(crate) const NOTO_CJK_HK_BLACK: FontAsset = FontAsset {
    filename: "NotoSansCJKhk-Black.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/HongKong/NotoSansCJKhk-Black.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/HongKong/NotoSansCJKhk-Black.otf",
    ],
};
pub(crate) const NOTO_CJK_JP_BOLD: FontAsset = FontAsset {
    filename: "NotoSansCJKjp-Bold.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/Japanese/NotoSansCJKjp-Bold.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/Japanese/NotoSansCJKjp-Bold.otf",
    ],
};
pub(crate) const NOTO_CJK_JP_BLACK: FontAsset = FontAsset {
    filename: "NotoSansCJKjp-Black.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/Japanese/NotoSansCJKjp-Black.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/Japanese/NotoSansCJKjp-Black.otf",
    ],
};
pub(crate) const NOTO_CJK_KR_BOLD: FontAsset = FontAsset {
    filename: "NotoSansCJKkr-Bold.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/Korean/NotoSansCJKkr-Bold.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/Korean/NotoSansCJKkr-Bold.otf",
    ],
};
pub(crate) const NOTO_CJK_KR_BLACK: FontAsset = FontAsset {
    filename: "NotoSansCJKkr-Black.otf",
    urls: &[
        "https://raw.githubusercontent.com/notofonts/noto-cjk/main/Sans/OTF/Korean/NotoSansCJKkr-Black.otf",
        "https://raw.githubusercontent.com/googlefonts/noto-cjk/main/Sans/OTF/Korean/NotoSansCJKkr-Black.otf",
    ],
};
pub(crate) const DEFAULT_GITHUB_PROXIES: &[&str] = &["https://fastgit.cc/", "https://ghfast.top/"];
