use charming_core::GrammarKind;

pub struct LangsArgs {
    pub kinds: bool,
}

pub fn run(args: LangsArgs) {
    print!("{}", render(&args));
}

pub fn render(args: &LangsArgs) -> String {
    let langs = charming_langs::all();
    let mut out = format!("Supported languages ({}):\n", langs.len());
    for lang in langs {
        out.push_str(&format!("  {}\n", lang.name()));
        if !args.kinds {
            continue;
        }

        let mut kinds = lang.all_named_node_kinds();
        kinds.sort_unstable();
        kinds.dedup();
        for kind in kinds {
            let marker = if GrammarKind::from_kind(kind).is_some() {
                "*"
            } else {
                ""
            };
            out.push_str(&format!("    {kind}{marker}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{LangsArgs, render};

    #[test]
    #[cfg(feature = "lang-python")]
    fn lists_python() {
        insta::assert_snapshot!(render(&LangsArgs { kinds: false }), @r"
        Supported languages (1):
          python
        ");
    }

    #[test]
    #[cfg(feature = "lang-python")]
    fn kinds_are_marked() {
        let output = render(&LangsArgs { kinds: true });
        assert!(output.starts_with("Supported languages (1):\n  python\n"), "{output}");
        assert!(output.contains("\n    list*\n"), "{output}");
        assert!(output.contains("\n    keyword_argument*\n"), "{output}");
        assert!(output.contains("\n    module\n"), "{output}");
        assert!(!output.contains("\n    list*\n    list*\n"), "{output}");
    }
}
