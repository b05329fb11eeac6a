// src/prompt.rs

use crate::extractors::boundary::condense;

/// Fixed instructional template prepended to a condensed article to form
/// the prompt for the external language model. Opaque payload as far as
/// the extraction logic is concerned; the exact bytes matter because the
/// downstream model is steered by this wording.
pub const SPECTRAL_PROMPT: &str = r#"I am about to paste an article from the *Journal of Natural Products*. This article may contain spectral peak data (e.g., NMR, IR, MS, UV).

Your job is to extract and format all reported spectral data into **strict, copy-pastable tables** suitable for spreadsheet editors (Excel, Google Sheets, etc.).

---

#### Rules

1. **Compound indexing:**

   * Each compound must be indexed numerically in order (1, 2, 3, …).
   * If there are sub-compounds, use a letter suffix (e.g., 7a, 7b).
   * Always use this standardized system for compound titles.

2. **Per compound:** Create a separate set of tables for each compound.

3. **Experimental conditions:** Always include a dedicated table summarizing all reported conditions.

4. **Table presence:**

   * **If a type of spectral data is not reported, do not create a placeholder table.** Simply omit it.
   * Never leave an entire empty table — only include tables that contain at least one row of data.

5. **Table formats (with locked column order):**

   * **Experimental Conditions Table**
     \| Technique | Field Strength / Resolution | Solvent | Temperature | Other Notes |

   * **¹H NMR Table**
     \| Position | δ (ppm) | Multiplicity | J (Hz) | Integration | Notes |

   * **¹³C NMR Table**
     \| Position | δ (ppm) | Type (C, CH, CH₂, CH₃) | Notes |

   * **Multiplicity-edited HSQC Table**
     \| Position | δH (ppm) | δC (ppm) | Multiplicity | Notes |
     *If derived from reported ¹H and ¹³C NMR data, label clearly as “Derived HSQC (from reported NMR data).”*

   * **IR Table**
     \| Wavenumber (cm⁻¹) | Intensity | Assignment | Notes |

   * **MS / HRMS Table**
     \| m/z | Relative Intensity | Assignment | Notes |

   * **UV Table**
     \| λmax (nm) | log ε (or Absorbance) | Solvent | Notes |

6. **Formatting:**

   * Always use **strict Markdown table syntax** (`| col1 | col2 | ... |`).
   * Keep column order fixed, even if some values are missing.
   * Leave cells blank if a value is not reported.
   * Each row MUST correspond to exactly **one atom entry or one reported signal**.
   * Do not merge rows, combine multiple atoms in one row, or add free text outside the Notes column.

7. **Ambiguities:**

   * If any assignments, shifts, or couplings are ambiguous, record that information **directly in the Notes column of the same row**.
   * Do **not** use footnotes, asterisks, or pooled notes at the bottom of a table.

8. **Detail:**

   * Include all reported data exactly as given (chemical shifts, multiplicities, J couplings, integration, wavenumbers, intensities, fragments, λmax values, absorbance, etc.).
   * **The only exception:** You may derive and construct a multiplicity-edited HSQC table when possible. Always label it explicitly as derived if not directly reported.

---

#### Output format per compound

* Title: **Compound X (e.g., Compound 7a)**
* Table 1: Experimental Conditions
* Table 2: ¹H NMR (if available)
* Table 3: ¹³C NMR (if available)
* Table 4: HSQC (direct or derived, clearly labeled, if available)
* Table 5: IR (if available)
* Table 6: MS / HRMS (if available)
* Table 7: UV (if available)
* Additional tables as needed (always with strict locked columns).

---

#### Important

* Do **not** summarize, paraphrase, or skip values.
* Only extract and structure exactly what is reported.
* Do **not** generate empty placeholder tables.
* Each row must correspond to exactly one reported signal or atom entry.
* The only exception is deriving HSQC when possible — and those must be **clearly labeled as derived**.
* Ensure all tables are consistent, machine-readable, and ready for direct pasting into any spreadsheet editor.

Here is the article:

"#;

/// Condenses `article_text` and prepends the instructional template.
/// Thin wrapper around [`condense`], kept out of the core contract.
pub fn build_prompt(article_text: &str) -> String {
    format!("{}{}", SPECTRAL_PROMPT, condense(article_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_ends_with_article_lead_in() {
        assert!(SPECTRAL_PROMPT.ends_with("Here is the article:\n\n"));
    }

    #[test]
    fn prompt_is_template_plus_condensed_body() {
        let article = "Abstract\nBODY\nReferences\nThis article references 9 other publications.\n";
        let prompt = build_prompt(article);
        assert_eq!(prompt, format!("{}BODY", SPECTRAL_PROMPT));
    }
}
