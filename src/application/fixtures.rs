// Sample dashboard fixtures for integration testing
use crate::application::dashboard_store::DashboardStore;
use crate::application::layout_builder::{ChartMeta, LayoutBuilder};
use crate::domain::dashboard::Dashboard;
use crate::domain::layout::{GRID_ID, LayoutError, PositionTree};
use uuid::uuid;

pub const MULTIPLE_TABS_SLUG: &str = "multi_tabs_test";
pub const MULTIPLE_TABS_TITLE: &str = "multiple tabs Test";

const SURVEY_INTRO: &str = "## FreeCodeCamp New Coder Survey 2018\n\nEvery year, FCC surveys its user base (mostly budding software developers) to learn more about their interests, backgrounds, goals, job status, and socioeconomic features. This dashboard visualizes survey data from the 2018 survey.\n\n- [Survey link](https://freecodecamp.typeform.com/to/S3UeD9)\n- [Dataset](https://github.com/freeCodeCamp/2018-new-coder-survey)\n- [FCC Blog Post](https://www.freecodecamp.org/news/we-asked-20-000-people-who-they-are-and-how-theyre-learning-to-code-fff5d668969/)";

const DEMOGRAPHICS: &str = "# Demographics\n\nFreeCodeCamp is a completely-online community of people learning to code and consists of aspiring & current developers from all over the world. That doesn't necessarily mean that access to these types of opportunities are evenly distributed. \n\nThe following charts can begin to help us understand:\n\n- the original citizenship of the survey respondents\n- minority representation among both aspiring and current developers\n- their age distribution\n- household languages";

const ASPIRING_DEVELOPERS: &str = "# Aspiring Developers\n\nThe mission of FreeCodeCamp is to \"help people learn to code for free\". With this in mind, it's no surprise that ~83% of this survey's respondents fall into the **Aspiring Developer** category.\n\nIn this tab, we use visualization to explore:\n\n- Interest in relocating for work\n- Preferences around work location & style\n- Distribution of expected income\n- Distribution of highest degree held\n- Heatmap of highest degree held vs employment style preference";

const CURRENT_DEVELOPERS: &str = "# Current Developers\n\nWhile majority of the students on FCC are Aspiring developers, there's a nontrivial minority that's there to continue leveling up their skills (17% of the survey respondents).\n\nBased on how respondents self-identified in the start of the survey, they were asked different questions. In this tab, we use visualizations to explore:\n\n- The buckets of commute team these developers encounter\n- The proportion of developers whose current job is their first developer job\n- Distribution of last year's income\n- The geographic distribution of these developers\n- The overlap between commute time and if their current job is their first developer job\n- Potential link between highest degree earned and last year's income";

/// The multiple-tabs sample layout: three tabs over the FCC New Coder
/// Survey 2018 charts, including nested columns and markdown tiles.
pub fn multiple_tabs_position() -> PositionTree {
    build_multiple_tabs().expect("the multiple-tabs fixture layout is statically consistent")
}

fn build_multiple_tabs() -> Result<PositionTree, LayoutError> {
    let mut b = LayoutBuilder::new("FCC New Coder Survey 2018");
    b.add_tabs(GRID_ID, "TABS-L-d9eyOE-b")?;

    // Tab 1: Overview
    b.add_tab("TABS-L-d9eyOE-b", "TAB-AsMaxdYL_t", "Overview")?;

    b.add_row("TAB-AsMaxdYL_t", "ROW-y-GwJPgxLr")?;
    b.add_markdown("ROW-y-GwJPgxLr", "MARKDOWN-__u6CsUyfh", SURVEY_INTRO, 6, 30)?;
    b.add_chart(
        "ROW-y-GwJPgxLr",
        "CHART-aytwlT4GAq",
        ChartMeta::new(83, "Breakdown of Developer Type", 6, 30)
            .with_uuid(uuid!("b8386be8-f44e-6535-378c-2aa2ba461286")),
    )?;

    b.add_row("TAB-AsMaxdYL_t", "ROW-mOvr_xWm1")?;
    b.add_markdown("ROW-mOvr_xWm1", "MARKDOWN-zc2mWxZeox", DEMOGRAPHICS, 3, 52)?;
    b.add_chart(
        "ROW-mOvr_xWm1",
        "CHART-Q3pbwsH3id",
        ChartMeta::new(79, "Are you an ethnic minority in your city?", 3, 50)
            .with_name_override("Minority Status (in their city)")
            .with_uuid(uuid!("def07750-b5c0-0b69-6228-cb2330916166")),
    )?;
    b.add_chart(
        "ROW-mOvr_xWm1",
        "CHART-o-JPAWMZK-",
        ChartMeta::new(69, "Gender", 3, 50)
            .with_uuid(uuid!("0f6b447c-828c-e71c-87ac-211bc412b214")),
    )?;
    b.add_chart(
        "ROW-mOvr_xWm1",
        "CHART-YSzS5GOOLf",
        ChartMeta::new(49, "Ethnic Minority & Gender", 3, 54)
            .with_uuid(uuid!("4880e4f4-b701-4be0-86f3-e7e89432e83b")),
    )?;

    b.add_row("TAB-AsMaxdYL_t", "ROW-UsW-_RPAb")?;
    b.add_column("ROW-UsW-_RPAb", "COLUMN-OJ5spdMmNh", 3)?;
    b.add_chart(
        "COLUMN-OJ5spdMmNh",
        "CHART-VvFbGxi3X_",
        ChartMeta::new(41, "Top 15 Languages Spoken at Home", 3, 62)
            .with_uuid(uuid!("03a74c97-52fc-cf87-233c-d4275f8c550c")),
    )?;
    b.add_chart(
        "COLUMN-OJ5spdMmNh",
        "CHART-UtSaz4pfV6",
        ChartMeta::new(59, "Age distribution of respondents", 3, 50)
            .with_uuid(uuid!("5f1ea868-604e-f69d-a241-5daa83ff33be")),
    )?;
    b.add_chart(
        "ROW-UsW-_RPAb",
        "CHART-fLpTSAHpAO",
        ChartMeta::new(60, "Country of Citizenship", 9, 118)
            .with_uuid(uuid!("2ba66056-a756-d6a3-aaec-0c243fb7062e")),
    )?;

    // Tab 2: Aspiring Developers
    b.add_tab("TABS-L-d9eyOE-b", "TAB-YT6eNksV-", "\u{1f680} Aspiring Developers")?;

    b.add_row("TAB-YT6eNksV-", "ROW-DR80aHJA2c")?;
    b.add_markdown("ROW-DR80aHJA2c", "MARKDOWN-BUmyHM2s0x", ASPIRING_DEVELOPERS, 4, 50)?;
    b.add_chart(
        "ROW-DR80aHJA2c",
        "CHART-XHncHuS5pZ",
        ChartMeta::new(78, "Number of Aspiring Developers", 2, 41)
            .with_name_override("What type of work would you prefer?")
            .with_uuid(uuid!("a0e5329f-224e-6fc8-efd2-d37d0f546ee8")),
    )?;
    b.add_chart(
        "ROW-DR80aHJA2c",
        "CHART--w_Br1tPP3",
        ChartMeta::new(85, "\u{2708}\u{fe0f} Relocation ability", 3, 51)
            .with_uuid(uuid!("a6dd2d5a-2cdc-c8ec-f30c-85920f4f8a65")),
    )?;
    b.add_chart(
        "ROW-DR80aHJA2c",
        "CHART-FKuVqq4kaA",
        ChartMeta::new(50, "Work Location Preference", 3, 50)
            .with_name_override("Work Location Preference")
            .with_uuid(uuid!("e6b09c28-98cf-785f-4caf-320fd4fca802")),
    )?;

    b.add_row("TAB-YT6eNksV-", "ROW--BIzjz9F0")?;
    b.add_column("ROW--BIzjz9F0", "COLUMN-IEKAo_QJlz", 4)?;
    b.add_chart(
        "COLUMN-IEKAo_QJlz",
        "CHART-JnpdZOhVer",
        ChartMeta::new(51, "Highest degree held", 2, 50)
            .with_uuid(uuid!("9f7d2b9c-6b3a-69f9-f03e-d3a141514639")),
    )?;
    b.add_chart(
        "COLUMN-IEKAo_QJlz",
        "CHART-v22McUFMtx",
        ChartMeta::new(71, "How much do you expect to earn? ($0 - 100k)", 4, 52)
            .with_name_override("\u{1f4b2}Expected Income (excluding outliers)")
            .with_uuid(uuid!("6d0ceb30-2008-d19c-d285-cf77dc764433")),
    )?;
    b.add_chart(
        "ROW--BIzjz9F0",
        "CHART-lQVSAw0Or3",
        ChartMeta::new(94, "How do you prefer to work?", 4, 100)
            .with_name_override("Preferred Employment Style vs Degree")
            .with_uuid(uuid!("cb8998ab-9f93-4f0f-4e4b-3bfe4b0dea9d")),
    )?;
    b.add_chart(
        "ROW--BIzjz9F0",
        "CHART-wxWVtlajRF",
        ChartMeta::new(82, "Preferred Employment Style", 4, 104)
            .with_uuid(uuid!("bff88053-ccc4-92f2-d6f5-de83e950e8cd")),
    )?;

    // Tab 3: Current Developers
    b.add_tab("TABS-L-d9eyOE-b", "TAB-l_9I0aNYZ", "\u{1f4bb} Current Developers")?;

    b.add_row("TAB-l_9I0aNYZ", "ROW-b7USYEngT")?;
    b.add_markdown("ROW-b7USYEngT", "MARKDOWN-NQmSPDOtpl", CURRENT_DEVELOPERS, 4, 56)?;
    b.add_chart(
        "ROW-b7USYEngT",
        "CHART--0GPGmD-pO",
        ChartMeta::new(
            91,
            "Current Developers: Is this your first development job?",
            2,
            56,
        )
        .with_name_override("Is this your first development job?")
        .with_uuid(uuid!("bfe5a8e6-146f-ef59-5e6c-13d519b236a8")),
    )?;
    b.add_chart(
        "ROW-b7USYEngT",
        "CHART-QVql08s5Bv",
        ChartMeta::new(92, "First Time Developer?", 3, 56)
            .with_uuid(uuid!("edc75073-8f33-4123-a28d-cd6dfb33cade")),
    )?;
    b.add_chart(
        "ROW-b7USYEngT",
        "CHART-0-zzTwBINh",
        ChartMeta::new(72, "Last Year Income Distribution", 3, 55)
            .with_uuid(uuid!("a2ec5256-94b4-43c4-b8c7-b83f70c5d4df")),
    )?;

    b.add_row("TAB-l_9I0aNYZ", "ROW-kNjtGVFpp")?;
    b.add_chart(
        "ROW-kNjtGVFpp",
        "CHART-5QwNlSbXYU",
        ChartMeta::new(90, "Commute Time", 5, 69)
            .with_uuid(uuid!("097c05c9-2dd2-481d-813d-d6c0c12b4a3d")),
    )?;
    b.add_chart(
        "ROW-kNjtGVFpp",
        "CHART-37fu7fO6Z0",
        ChartMeta::new(93, "Degrees vs Income", 7, 69)
            .with_uuid(uuid!("02f546ae-1bf4-bd26-8bc2-14b9279c8a62")),
    )?;

    b.add_row("TAB-l_9I0aNYZ", "ROW-s3l4os7YY")?;
    b.add_chart(
        "ROW-s3l4os7YY",
        "CHART-LjfhrUkEef",
        ChartMeta::new(86, "First Time Developer & Commute Time", 5, 68)
            .with_uuid(uuid!("067c4a1e-ae03-4c0c-8e2a-d2c0f4bf43c3")),
    )?;
    b.add_chart(
        "ROW-s3l4os7YY",
        "CHART-ZECnzPz8Bi",
        ChartMeta::new(70, "Location of Current Developers", 7, 74)
            .with_uuid(uuid!("5596e0f6-78a9-465d-8325-7139c794a06a")),
    )?;

    b.build()
}

/// Seed the multiple-tabs dashboard through a dashboard-creation
/// collaborator, as the integration harness does.
pub fn load_multiple_tabs_dashboard(store: &dyn DashboardStore) -> anyhow::Result<Dashboard> {
    let position = multiple_tabs_position();
    let position_json = serde_json::to_string(&position)?;
    store.create_dashboard(MULTIPLE_TABS_SLUG, MULTIPLE_TABS_TITLE, &position_json)
}
