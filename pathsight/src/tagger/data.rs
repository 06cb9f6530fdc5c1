//! Extension tables behind the compression and document presets.
//!
//! Entries may contain shell-style wildcards; they are expanded against the
//! extensions of the paths being tagged.

/// Archive formats without compression.
pub const ARCHIVE: &[&str] = &[
    ".a", ".ar", ".cpio", ".shar", ".LBR", ".iso", ".lbr", ".mar", ".sbx", ".tar",
];

/// Formats that both archive and compress.
pub const ARCHIVE_AND_COMPRESSION: &[&str] = &[
    ".7z", ".s7z", ".ace", ".afa", ".alz", ".apk", ".arc", ".arj", ".b1", ".b6z", ".ba", ".bh",
    ".cab", ".car", ".cfs", ".cpt", ".dar", ".dd", ".dgc", ".dmg", ".ear", ".gca", ".ha", ".hki",
    ".ice", ".jar", ".kgb", ".lzh", ".lha", ".lzx", ".pak", ".partimg", ".paq6", ".paq7",
    ".paq8", ".pea", ".pim", ".pit", ".qda", ".rar", ".rk", ".sda", ".sea", ".sen", ".sfx",
    ".shk", ".sit", ".sitx", ".sqx", ".ta", ".gz", ".tgz", ".tbz2", ".tlz", ".uc", ".uc0",
    ".uc2", ".ucn", ".ur2", ".ue2", ".uca", ".uha", ".war", ".wim", ".xar", ".xp3", ".yz1",
    ".zip", ".zipx", ".zoo", ".zpaq", ".zz",
];

/// Compression-only formats.
pub const COMPRESSION: &[&str] = &[
    ".bz2", ".F", ".?XF", ".lz", ".lzma", ".lzo", ".rz", ".sfark", ".sz", ".?Q?", ".?Z?", ".xz",
    ".z", ".Z", ".??_",
];

/// Office documents.
pub const DOCUMENT: &[&str] = &[
    ".doc", ".dot", ".wbk", ".docx", ".docm", ".dotx", ".dotm", ".docb", ".pdf", ".xls", ".xlsx",
];

/// Presentations.
pub const PRESENTATION: &[&str] = &[
    ".ppt", ".pot", ".pps", ".pptx", ".pptm", ".potx", ".potm", ".ppam", ".ppsx", ".ppsm",
    ".sldx", ".sldm",
];

/// Raster and vector images.
pub const IMAGE: &[&str] = &[
    ".bmp", ".cod", ".gif", ".ief", ".jpe", ".jpeg", ".jpg", ".jfif", ".svg", ".tif", ".tiff",
    ".ras", ".cmx", ".ico", ".pnm", ".pbm", ".pgm", ".png", ".ppm", ".rgb", ".xbm", ".xpm",
    ".xwd",
];
