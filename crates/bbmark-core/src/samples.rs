//! Reference documents with their expected BBCode, shared by the self-check front ends.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sample {
    pub name: &'static str,
    pub markdown: &'static str,
    pub bbcode: &'static str,
}

pub fn samples() -> &'static [Sample] {
    SAMPLES
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Headings",
        markdown: "\n# Heading 1\n## Heading 2\n### Heading 3\n",
        bbcode: "[h1]Heading 1[/h1]\n\n[h2]Heading 2[/h2]\n\n[h3]Heading 3[/h3]\n",
    },
    Sample {
        name: "Bold and Italic",
        markdown: "\n**Bold**\n*Italic*\n_Italic_\n~~Strike~~\n",
        bbcode: "[b]Bold[/b] [i]Italic[/i] [i]Italic[/i] [strike]Strike[/strike]\n",
    },
    Sample {
        name: "Line Breaks",
        markdown: "Soft\nwrapped, hard  \nbroken\n",
        bbcode: "Soft wrapped, hard\nbroken\n",
    },
    Sample {
        name: "Links",
        markdown: "[Google](https://google.com)",
        bbcode: "[url=https://google.com]Google[/url]\n",
    },
    Sample {
        name: "Quotes",
        markdown: "> This is a quote",
        bbcode: "[quote]This is a quote[/quote]\n",
    },
    Sample {
        name: "Inline and Block Code",
        markdown: "\n`inline code`\n\n```\nmultiline\ncode block\n```\n",
        bbcode: "[code]inline code[/code]\n\n[code]multiline\ncode block[/code]\n",
    },
    Sample {
        name: "Horizontal Rule",
        markdown: "above\n---\nbelow\n",
        bbcode: "above\n\n[hr][/hr]\n\nbelow\n",
    },
    Sample {
        name: "Unordered List",
        markdown: "\n* Item 1\n  * Item 1.1\n    * Item 1.1.1\n* Item 2\n- Dash item\n+ Plus item\n",
        bbcode: "[list]\n  [*] Item 1\n  [list]\n    [*] Item 1.1\n    [list]\n      [*] Item 1.1.1\n    [/list]\n  [/list]\n  [*] Item 2\n  [*] Dash item\n  [*] Plus item\n[/list]\n",
    },
    Sample {
        name: "Ordered List",
        markdown: "\n1. Step 1\n   1. Step 1.1\n      1. Step 1.1.1\n2. Step 2\n",
        bbcode: "[olist]\n  [*] Step 1\n  [olist]\n    [*] Step 1.1\n    [olist]\n      [*] Step 1.1.1\n    [/olist]\n  [/olist]\n  [*] Step 2\n[/olist]\n",
    },
    Sample {
        name: "Table",
        markdown: "\n| Name | Age |\n|------|-----|\n| John | 65  |\n| Gitte| 40  |\n| Sussie | 19 |\n",
        bbcode: "[table]\n  [tr]\n    [th]Name[/th]\n    [th]Age[/th]\n  [/tr]\n  [tr]\n    [td]John[/td]\n    [td]65[/td]\n  [/tr]\n  [tr]\n    [td]Gitte[/td]\n    [td]40[/td]\n  [/tr]\n  [tr]\n    [td]Sussie[/td]\n    [td]19[/td]\n  [/tr]\n[/table]\n",
    },
];
