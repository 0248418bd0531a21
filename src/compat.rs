/// Dotted-decimal version comparison: is `version` the same as or newer
/// than `base`? Missing segments count as zero, so `"1.9"` and `"1.9.0"`
/// are equal. Any segment that fails to parse makes the whole comparison
/// answer "not newer", the conservative default for config migration.
pub fn is_upper_version(version: &str, base: &str) -> bool {
    let parse = |s: &str| -> Option<Vec<u32>> {
        s.split('.').map(|segment| segment.parse::<u32>().ok()).collect()
    };
    let (Some(version), Some(base)) = (parse(version), parse(base)) else {
        return false;
    };

    let len = version.len().max(base.len());
    for i in 0..len {
        let v = version.get(i).copied().unwrap_or(0);
        let b = base.get(i).copied().unwrap_or(0);
        if v != b {
            return v > b;
        }
    }
    true
}
