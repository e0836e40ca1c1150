// Static display data for the landing page (single source of truth)

/// Example queries cycled by the hero search box.
pub const TYPEWRITER_QUERIES: &[&str] = &[
    "What is the minimum stair width in Ontario?",
    "NBC 2025 fire rating requirements",
    "BCBC maximum height for wood buildings",
    "Energy code window U-value requirements",
    "Barrier-free ramp slope limits",
];

pub struct Stat {
    pub value: u64,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 25707, label: "Sections", icon: "doc" },
    Stat { value: 14, label: "Codes", icon: "building" },
    Stat { value: 5, label: "Provinces", icon: "pin" },
];

pub struct CodeEntry {
    pub name: &'static str,
    pub full_name: &'static str,
    pub sections: u64,
    pub province: Option<&'static str>,
}

pub struct CodeGroup {
    pub title: &'static str,
    pub accent: &'static str,
    pub codes: &'static [CodeEntry],
}

pub const CODE_GROUPS: &[CodeGroup] = &[
    CodeGroup {
        title: "National Codes",
        accent: "blue",
        codes: &[
            CodeEntry { name: "NBC 2025", full_name: "National Building Code", sections: 4213, province: None },
            CodeEntry { name: "NFC 2025", full_name: "National Fire Code", sections: 1407, province: None },
            CodeEntry { name: "NPC 2025", full_name: "National Plumbing Code", sections: 595, province: None },
            CodeEntry { name: "NECB 2025", full_name: "National Energy Code", sections: 777, province: None },
        ],
    },
    CodeGroup {
        title: "Provincial Codes",
        accent: "emerald",
        codes: &[
            CodeEntry { name: "OBC", full_name: "Ontario Building Code", sections: 3925, province: Some("ON") },
            CodeEntry { name: "BCBC 2024", full_name: "BC Building Code", sections: 2645, province: Some("BC") },
            CodeEntry { name: "ABC", full_name: "Alberta Building Code", sections: 4165, province: Some("AB") },
            CodeEntry { name: "QCC 2020", full_name: "Quebec Construction Code", sections: 3925, province: Some("QC") },
        ],
    },
    CodeGroup {
        title: "User's Guides",
        accent: "amber",
        codes: &[
            CodeEntry { name: "Part 9 Guide", full_name: "Housing & Small Buildings", sections: 1399, province: None },
            CodeEntry { name: "Part 4 Guide", full_name: "Structural Design", sections: 21, province: None },
            CodeEntry { name: "NECB Guide", full_name: "Energy Code Guide", sections: 612, province: None },
        ],
    },
];

pub struct DemoConversation {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub reference_code: &'static str,
    pub reference_section: &'static str,
    pub reference_page: u32,
}

pub const DEMO_CONVERSATIONS: &[DemoConversation] = &[
    DemoConversation {
        category: "Mass Timber",
        question: "Can I build a 10-storey condo with mass timber in Toronto?",
        answer: "Yes! OBC 2024 now permits Encapsulated Mass Timber Construction (EMTC) up to 12 storeys. \
                 Your 10-storey condo qualifies. Key requirements: noncombustible protection on mass timber \
                 elements, 2-hour fire separation between suites, and automatic sprinklers throughout.",
        reference_code: "OBC Vol.1",
        reference_section: "3.2.2.58",
        reference_page: 245,
    },
    DemoConversation {
        category: "Egress",
        question: "My client wants a single exit stair for a 3-storey office. Possible?",
        answer: "Under NBC 2025, a single exit is permitted if: floor area \u{2264} 200m\u{b2} per storey, travel \
                 distance \u{2264} 15m to exit, and building is sprinklered. However, for a typical office building \
                 exceeding these limits, you'll need minimum 2 exits with separation \u{2265} 9m or half the diagonal.",
        reference_code: "NBC 2025",
        reference_section: "3.4.2.1",
        reference_page: 287,
    },
    DemoConversation {
        category: "NECB",
        question: "What's the required wall insulation for a new building in Ottawa?",
        answer: "Ottawa is Climate Zone 6. Per NECB 2020, above-grade walls require minimum R-27.4 (RSI 4.84) \
                 for mass walls or R-24.5 (RSI 4.31) for steel-framed. The 2025 NECB increases this by ~15%. \
                 Consider continuous exterior insulation to minimize thermal bridging.",
        reference_code: "NECB 2020",
        reference_section: "Table 3.2.2.2",
        reference_page: 89,
    },
    DemoConversation {
        category: "Fire Rating",
        question: "What fire rating do I need between a parking garage and residential above?",
        answer: "Per OBC 3.2.1.2, a parking garage (Group F3) below residential (Group C) requires a 2-hour \
                 fire separation. If the garage is sprinklered and \u{2264} 2 storeys below grade, the floor \
                 assembly above must be a fire separation with no openings except for required exits.",
        reference_code: "OBC Vol.1",
        reference_section: "3.2.1.2",
        reference_page: 156,
    },
];

pub const GITHUB_URL: &str = "https://github.com/DavidCho1999/Canada-AEC-Code-MCP";
pub const CHATGPT_URL: &str =
    "https://chatgpt.com/g/g-6974534ca8e081918b4355f87c6a1f3e-canadian-building-code-navigator";
pub const SMITHERY_URL: &str = "https://smithery.ai/server/davidcho/ca-building-code-mcp";

/// MCP client config snippet offered for copy in the setup section.
pub const MCP_CONFIG_SNIPPET: &str = r#"{
  "mcpServers": {
    "building-code": {
      "command": "uvx",
      "args": ["building-code-mcp"]
    }
  }
}"#;

pub const PIP_INSTALL_COMMAND: &str = "pip install building-code-mcp";
