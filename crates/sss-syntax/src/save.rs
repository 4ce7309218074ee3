//! SAVE OUTFILE directive generation.

/// Build the directive that tells the interpreter to persist its working
/// data as a compressed `.sav` file next to the source dictionary.
pub fn save_directive(output_dir: &str, stem: &str) -> String {
    format!("SAVE OUTFILE='{output_dir}/{stem}.sav'\n/COMPRESSED.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_directive_is_templated() {
        assert_eq!(
            save_directive("/data/surveys", "MySurvey"),
            "SAVE OUTFILE='/data/surveys/MySurvey.sav'\n/COMPRESSED."
        );
    }
}
