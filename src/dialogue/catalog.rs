//! Canned response catalog
//!
//! Static reply texts keyed by intent, rendered once at construction
//! with the deployment's contact details.

/// Operator contact details embedded in replies and used as the
/// notification recipient. Loaded once at startup.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub agent_response_time: String,
}

impl ContactInfo {
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("FINCHAT_CONTACT_EMAIL")
                .unwrap_or_else(|_| "ycusgroup@gmail.com".to_string()),
            phone: std::env::var("FINCHAT_CONTACT_PHONE")
                .unwrap_or_else(|_| "+91-8828076093".to_string()),
            agent_response_time: std::env::var("FINCHAT_AGENT_RESPONSE_TIME").unwrap_or_else(
                |_| {
                    "Our agents typically respond within 10 minutes during business hours."
                        .to_string()
                },
            ),
        }
    }
}

/// All canned reply texts. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    pub greeting: String,
    pub tax_info: String,
    pub accounting_menu: String,
    pub financial_menu: String,
    pub support_hours: String,
    pub how_are_you: String,
    pub bot_name: String,
    pub fallback: String,
    pub farewell: String,
    pub hold_for_agent: String,
    pub call_us: String,
    pub email_us: String,
    pub invalid_choice: String,
    pub exit_contact: String,
    pub exit_financial: String,
    pub exit_accounting: String,
    /// Explanations for accounting menu options 1-5
    pub accounting_items: [String; 5],
    /// Explanations for financial menu options 1-4
    pub financial_items: [String; 4],
}

impl ResponseCatalog {
    #[allow(clippy::too_many_lines)] // Flat listing of canned texts
    pub fn new(contact: &ContactInfo) -> Self {
        Self {
            greeting: "👋 Hello! How can I assist you with your accounting or financial \
                       services today?"
                .to_string(),
            tax_info: "🧾 I can help you calculate your taxes. Please provide your income \
                       details and tax filing status."
                .to_string(),
            accounting_menu: "📊 We offer the following services:\n\
                              1️⃣. Direct Tax Filing\n\
                              2️⃣. Indirect Tax Filing\n\
                              3️⃣. Bookkeeping\n\
                              4️⃣. Financial Planning\n\
                              5️⃣. Consulting\n\
                              6️⃣. Financial Services\n\
                              Please type the number of the service you'd like to know more \
                              about, or type 'exit' to leave this menu."
                .to_string(),
            financial_menu: "💼 Here are the Financial Services we offer:\n\
                             1️⃣. Investment Planning\n\
                             2️⃣. Retirement Planning\n\
                             3️⃣. Risk Management\n\
                             4️⃣. Debt Management\n\
                             Please type the number of the Financial Service you'd like to \
                             know more about, or type 'exit' to leave this menu."
                .to_string(),
            support_hours: "⏰ Our support is available from 9 AM to 6 PM, Monday to Friday."
                .to_string(),
            how_are_you: "😊 I'm doing great, thank you for asking! How can I assist you \
                          today?"
                .to_string(),
            bot_name: "🤖 I'm your Financial Assistant Bot, here to help with your \
                       accounting and financial inquiries."
                .to_string(),
            fallback: format!(
                "❓ I'm sorry, I didn't understand that. Would you like to connect with a \
                 human agent?\n\
                 1️⃣. Chat with an Agent 💬\n\
                 2️⃣. Call us at 📞 {}\n\
                 3️⃣. Email us at ✉️ {}\n\
                 Please type the number of your choice, or type 'exit' to leave this menu.",
                contact.phone, contact.email
            ),
            farewell: "👋 Goodbye! It was a pleasure assisting you. Have a great day! 🌟"
                .to_string(),
            hold_for_agent: format!(
                "🔗 Connecting you to a live agent. Please hold on while we notify our \
                 team. {}",
                contact.agent_response_time
            ),
            call_us: format!(
                "📞 You can call us at {} for immediate assistance.",
                contact.phone
            ),
            email_us: format!("✉️ Please email us at {} with your query.", contact.email),
            invalid_choice: "❌ Invalid choice. Please select a valid option (1, 2, or 3)."
                .to_string(),
            exit_contact: "🚪 Exiting contact options. How else can I help you?".to_string(),
            exit_financial: "🚪 Exiting Financial Services. How else can I assist you?"
                .to_string(),
            exit_accounting: "🚪 Exiting Accounting Services. How else can I assist you?"
                .to_string(),
            accounting_items: [
                "🧾 Direct taxes are levied directly on an individual's or organization's \
                 income or wealth. Examples include Income Tax, Corporate Tax, and Wealth \
                 Tax."
                    .to_string(),
                "🧾 Indirect taxes are collected on goods and services and passed on to \
                 the government by intermediaries (e.g., retailers). Examples include GST, \
                 VAT, and Sales Tax."
                    .to_string(),
                "📚 Bookkeeping involves maintaining accurate financial records for your \
                 business."
                    .to_string(),
                "📋 Financial Planning assists you in creating a roadmap for your \
                 financial goals."
                    .to_string(),
                "💡 Consulting provides expert advice to optimize your financial \
                 strategies."
                    .to_string(),
            ],
            financial_items: [
                "📈 Investment Planning helps you grow your wealth through strategic \
                 investments."
                    .to_string(),
                "🏖️ Retirement Planning helps you secure a financially stable retirement."
                    .to_string(),
                "⚠️ Risk Management identifies and mitigates financial risks effectively."
                    .to_string(),
                "💳 Debt Management helps you manage and reduce your debts systematically."
                    .to_string(),
            ],
        }
    }
}
