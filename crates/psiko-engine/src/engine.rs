//! The conversation state machine.
//!
//! One authoritative engine drives every conversation: account resolution,
//! biodata collection, the WHO-5 → GAD-7 → K10 → MBI → NAQ-R sequence, the
//! NAQ-R trailing free-text items, scoring and persistence, then the
//! completed-profile chat gate. All user-facing text is plain language —
//! store failures are logged server-side, never interpolated into replies.

use std::sync::Arc;

use tracing::{error, info, warn};

use psiko_core::error::ValidationError;
use psiko_core::models::account::Role;
use psiko_core::models::biodata::{self, BiodataField};
use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;
use psiko_core::validate::{is_valid_email, validate_biodata};
use psiko_instruments::instruments::naqr;
use psiko_instruments::{Instrument, catalog, instrument};

use crate::context::build_profile_context;
use crate::event::{Choice, Command, ConversationInput, Prompt, Reply};
use crate::session::{Session, SessionRegistry};
use crate::state::ConversationState;
use crate::stores::{AccountStore, ChatAssistant, ResultStore};
use crate::summary::{self, RunScores};

const MSG_RETRY_LATER: &str =
    "Terjadi kesalahan saat menyimpan biodata Anda. Silakan coba lagi nanti dengan /start.";
const MSG_PROFILE_LOAD_FAILED: &str =
    "Terjadi kesalahan saat memuat profil Anda. Silakan coba lagi nanti.";
const MSG_PICK_AN_OPTION: &str = "Silakan pilih salah satu jawaban yang tersedia.";

const HELP_TEXT: &str = "📖 Bantuan Chatbot Psiko\n\n\
Perintah yang tersedia:\n\
• /start - Mulai & setup profil\n\
• /help - Tampilkan bantuan\n\
• /profile - Lihat profil Anda\n\
• /kuesioner - Mengisi ulang kuesioner untuk melihat perkembangan\n\
• /logout - Keluar dari sesi saat ini\n\n\
Cara penggunaan:\n\
Cukup ketik pertanyaan Psiko Anda, dan bot akan memberikan jawaban berdasarkan kitab referensi dengan mempertimbangkan profil Anda.\n\n\
Contoh pertanyaan:\n\
• Apa itu kesehatan mental ?";

/// The questionnaire conversation engine. Construct once, share across all
/// conversations; per-conversation state lives in the session registry.
pub struct ConversationEngine {
    accounts: Arc<dyn AccountStore>,
    results: Arc<dyn ResultStore>,
    assistant: Arc<dyn ChatAssistant>,
    sessions: SessionRegistry,
}

impl ConversationEngine {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        results: Arc<dyn ResultStore>,
        assistant: Arc<dyn ChatAssistant>,
    ) -> ConversationEngine {
        ConversationEngine {
            accounts,
            results,
            assistant,
            sessions: SessionRegistry::new(),
        }
    }

    /// The live session registry, exposed so the session layer can expire
    /// idle conversations.
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Process one inbound action for one conversation.
    ///
    /// Events for the same key are serialized (the session's mutex is held
    /// for the full handling, awaited store calls included); different keys
    /// proceed concurrently.
    pub async fn handle(&self, conversation_id: i64, input: ConversationInput) -> Reply {
        let cell = self.sessions.get_or_create(conversation_id);
        let mut session = cell.lock().await;
        match input {
            ConversationInput::Command(cmd) => self.handle_command(&mut session, cmd).await,
            ConversationInput::Text(text) => self.handle_input(&mut session, text, false).await,
            ConversationInput::Selection(value) => {
                self.handle_input(&mut session, value, true).await
            }
        }
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    async fn handle_command(&self, session: &mut Session, cmd: Command) -> Reply {
        match cmd {
            Command::Start => self.start(session).await,
            Command::Questionnaire => self.restart_questionnaire(session),
            Command::Profile => self.show_profile(session),
            Command::Help => Reply::message(HELP_TEXT),
            Command::Cancel => {
                session.reset();
                Reply::message("Profiling dibatalkan. Gunakan /start untuk memulai lagi.")
            }
            Command::Reset => {
                session.reset();
                info!("session profile reset");
                Reply::message(
                    "Profil Anda telah direset. Gunakan /start untuk membuat profil baru.",
                )
            }
            Command::Logout => {
                let was_logged_in = session.profile.account_id.is_some();
                session.reset();
                if was_logged_in {
                    info!("user logged out, session cleared");
                    Reply::message(
                        "Anda telah berhasil logout. Sesi Anda telah dibersihkan.\n\n\
                         Gunakan /start untuk login kembali.",
                    )
                } else {
                    Reply::message("Anda saat ini tidak sedang login.")
                }
            }
        }
    }

    /// `/start`: resume wherever the profile left off.
    async fn start(&self, session: &mut Session) -> Reply {
        // Already logged in with a complete profile.
        if session.profile.completed {
            session.state = ConversationState::Completed;
            return Reply::message(
                "Selamat datang kembali! Anda sudah login dan profil Anda lengkap. \
                 Silakan ajukan pertanyaan Anda.",
            );
        }

        // Logged in, biodata complete, questionnaire unfinished.
        if session.profile.account_id.is_some() && session.profile.biodata_completed {
            let reply =
                Reply::message("Anda sebelumnya belum menyelesaikan kuesioner. Mari kita lanjutkan.");
            let prompt = self.begin_questionnaire(session);
            return reply.with_prompt(prompt);
        }

        // Logged in, biodata incomplete: resume at the first missing field.
        if session.profile.account_id.is_some() {
            let reply = Reply::message(
                "Akun Anda ditemukan, tetapi biodata belum lengkap. Mari kita lengkapi sekarang.",
            );
            return self.resume_biodata(session, reply).await;
        }

        // Brand new (or logged out).
        session.state = ConversationState::AskAccount;
        Reply::default().with_prompt(account_prompt())
    }

    /// `/kuesioner`: a fresh run for a logged-in user with complete biodata.
    fn restart_questionnaire(&self, session: &mut Session) -> Reply {
        if session.profile.account_id.is_none() {
            return Reply::message(
                "Anda harus login terlebih dahulu. Silakan gunakan /start untuk login atau mendaftar.",
            );
        }
        if !session.profile.biodata_completed {
            return Reply::message(
                "Anda harus melengkapi biodata terlebih dahulu sebelum mengisi kuesioner. \
                 Silakan gunakan /start.",
            );
        }
        let reply = Reply::message(
            "Baik, mari kita mulai sesi kuesioner yang baru untuk melihat perkembangan Anda.",
        );
        let prompt = self.begin_questionnaire(session);
        reply.with_prompt(prompt)
    }

    /// `/profile`: biodata plus the latest scored run.
    fn show_profile(&self, session: &Session) -> Reply {
        let profile = &session.profile;
        if !profile.biodata_completed {
            return Reply::message("Anda belum mengisi biodata. Gunakan /start untuk memulai.");
        }
        if !profile.completed {
            return Reply::message(
                "Anda belum menyelesaikan profiling. Gunakan /start untuk memulai.",
            );
        }
        // Prefer the persisted record; a completed run without an account
        // only exists in the session's raw answers.
        let scores = match profile.latest_result() {
            Some(record) => RunScores::from_record(record),
            None => RunScores::from_profile(profile),
        };
        Reply::message(summary::render_profile(profile, &scores))
    }

    // ── State dispatch ───────────────────────────────────────────────────────

    async fn handle_input(&self, session: &mut Session, value: String, selected: bool) -> Reply {
        match session.state {
            ConversationState::Idle | ConversationState::Completed => {
                self.chat(session, &value).await
            }
            ConversationState::AskAccount => self.choose_account_path(session, &value),
            ConversationState::RegisterEmail => self.register(session, &value).await,
            ConversationState::AwaitLoginEmail => self.login(session, &value).await,
            ConversationState::Biodata => self.record_biodata(session, value, selected).await,
            ConversationState::Questionnaire(id) => self.record_answer(session, id, &value),
            ConversationState::NaqrExperience => self.record_experience(session, &value),
            ConversationState::NaqrActors => self.record_bully_actors(session, value),
            ConversationState::NaqrCount => self.record_bully_count(session, value).await,
        }
    }

    // ── Account resolution ───────────────────────────────────────────────────

    fn choose_account_path(&self, session: &mut Session, value: &str) -> Reply {
        match value.trim() {
            "login" => {
                session.state = ConversationState::AwaitLoginEmail;
                Reply::default().with_prompt(Prompt::text_only(
                    "Baik, silakan masukkan email Anda untuk login:",
                ))
            }
            "register" => {
                session.state = ConversationState::RegisterEmail;
                Reply::default().with_prompt(Prompt::text_only(
                    "Baik, mari kita mulai proses pendaftaran.\n\nSilakan masukkan Email Anda:",
                ))
            }
            _ => Reply::message("Silakan pilih salah satu opsi.").with_prompt(account_prompt()),
        }
    }

    async fn register(&self, session: &mut Session, email: &str) -> Reply {
        let email = email.trim();
        if !is_valid_email(email) {
            return Reply::message(ValidationError::InvalidEmail.to_string())
                .with_prompt(Prompt::text_only("Silakan masukkan Email Anda:"));
        }

        match self.accounts.create_account(email).await {
            Ok(account_id) => {
                info!(account_id, "account created or found for registration");
                session.profile.account_id = Some(account_id);
                session
                    .profile
                    .biodata
                    .insert(BiodataField::Email.key().to_string(), email.to_string());
                let reply = Reply::message(
                    "Terima kasih! Akun Anda telah dibuat. Mari kita lanjutkan dengan melengkapi \
                     biodata Anda.",
                );
                self.resume_biodata(session, reply).await
            }
            Err(e) => {
                error!(error = %e, "failed to create account");
                session.state = ConversationState::Idle;
                Reply::message(
                    "Gagal membuat akun. Kemungkinan email sudah terdaftar atau terjadi kesalahan \
                     lain. Silakan coba lagi dengan /start.",
                )
            }
        }
    }

    async fn login(&self, session: &mut Session, email: &str) -> Reply {
        let account = match self.accounts.find_account_by_email(email.trim()).await {
            Ok(found) => found,
            Err(e) => {
                error!(error = %e, "account lookup failed");
                session.state = ConversationState::Idle;
                return Reply::message(MSG_PROFILE_LOAD_FAILED);
            }
        };
        let Some(account) = account else {
            session.state = ConversationState::Idle;
            return Reply::message(
                "Login gagal. Email tidak ditemukan. Silakan coba lagi atau daftar akun baru \
                 dengan /start.",
            );
        };

        let mut reply = Reply::message("Login berhasil! Memuat profil Anda...");

        let biodata = match self.accounts.load_biodata(account.id).await {
            Ok(loaded) => loaded.unwrap_or_default(),
            Err(e) => {
                error!(account_id = account.id, error = %e, "failed to load biodata");
                session.state = ConversationState::Idle;
                reply.push(MSG_PROFILE_LOAD_FAILED);
                return reply;
            }
        };
        let history = match self.accounts.load_result_history(account.id).await {
            Ok(history) => history,
            Err(e) => {
                error!(account_id = account.id, error = %e, "failed to load result history");
                session.state = ConversationState::Idle;
                reply.push(MSG_PROFILE_LOAD_FAILED);
                return reply;
            }
        };

        info!(
            account_id = account.id,
            results = history.len(),
            "profile loaded"
        );
        session.profile.account_id = Some(account.id);
        session.profile.role = account.role;
        session.profile.biodata_completed = biodata::next_missing_field(&biodata).is_none();
        session.profile.biodata = biodata;
        session.profile.health_results = history;
        session.profile.recompute_completed();

        if session.profile.completed {
            session.state = ConversationState::Completed;
            reply.push(
                "Profil Anda telah dimuat. Anda dapat melanjutkan percakapan atau melihat \
                 ringkasan profil dengan /profile.\n\nSilakan ajukan pertanyaan Anda.",
            );
            reply
        } else if session.profile.biodata_completed {
            reply.push("Anda sebelumnya belum menyelesaikan kuesioner. Mari kita lanjutkan.");
            let prompt = self.begin_questionnaire(session);
            reply.with_prompt(prompt)
        } else {
            reply.push(
                "Akun Anda ditemukan, tetapi biodata belum lengkap. Mari kita lengkapi sekarang.",
            );
            self.resume_biodata(session, reply).await
        }
    }

    // ── Biodata collection ───────────────────────────────────────────────────

    /// Enter the biodata flow at the first missing field, or finalize if the
    /// loaded biodata is already complete.
    async fn resume_biodata(&self, session: &mut Session, mut reply: Reply) -> Reply {
        match biodata::next_missing_field(&session.profile.biodata) {
            Some(field) => {
                session.state = ConversationState::Biodata;
                reply.with_prompt(field_prompt(field))
            }
            None => {
                reply.push("Biodata Anda sudah lengkap. Mari lanjutkan ke kuesioner.");
                self.finalize_biodata(session, reply).await
            }
        }
    }

    async fn record_biodata(&self, session: &mut Session, value: String, selected: bool) -> Reply {
        let Some(field) = biodata::next_missing_field(&session.profile.biodata) else {
            return self.finalize_biodata(session, Reply::default()).await;
        };

        let value = value.trim().to_string();
        if value.is_empty() {
            return Reply::default().with_prompt(field_prompt(field));
        }

        let mut reply = Reply::default();
        if selected && field.is_choice() {
            reply.push(format!("✅ {}: {}", field.prompt().replace(':', ""), value));
        }
        session
            .profile
            .biodata
            .insert(field.key().to_string(), value);

        // `next_missing_field` skips `jabatan_lain` unless jabatan warrants it.
        match biodata::next_missing_field(&session.profile.biodata) {
            Some(next) => reply.with_prompt(field_prompt(next)),
            None => self.finalize_biodata(session, reply).await,
        }
    }

    /// Validate and persist the completed biodata, then enter the
    /// questionnaire. Validation failure discards the in-progress profile;
    /// a save failure keeps it in memory so a later `/start` can retry.
    async fn finalize_biodata(&self, session: &mut Session, mut reply: Reply) -> Reply {
        if let Err(e) = validate_biodata(&session.profile.biodata) {
            warn!(error = %e, "biodata validation failed");
            reply.push(format!(
                "Terjadi kesalahan validasi: {e}\nSilakan mulai lagi dengan /start."
            ));
            session.reset();
            return reply;
        }

        let Some(account_id) = session.profile.account_id else {
            error!("session has no account id, cannot save biodata");
            session.state = ConversationState::Idle;
            reply.push(MSG_RETRY_LATER);
            return reply;
        };

        if let Err(e) = self
            .accounts
            .save_biodata(account_id, &session.profile.biodata)
            .await
        {
            error!(account_id, error = %e, "failed to save biodata");
            session.state = ConversationState::Idle;
            reply.push(MSG_RETRY_LATER);
            return reply;
        }

        info!(account_id, "biodata saved");
        session.profile.biodata_completed = true;
        reply.push(
            "Terima kasih, biodata Anda telah tersimpan. Sekarang, mari kita mulai sesi \
             kuesioner singkat.",
        );
        let prompt = self.begin_questionnaire(session);
        reply.with_prompt(prompt)
    }

    // ── Questionnaire sequence ───────────────────────────────────────────────

    /// Clear any previous answers and position at WHO-5 item 0.
    fn begin_questionnaire(&self, session: &mut Session) -> Prompt {
        session.profile.clear_answers();
        session.state = ConversationState::Questionnaire(InstrumentId::Who5);
        item_prompt(InstrumentId::Who5, 0)
    }

    fn record_answer(&self, session: &mut Session, id: InstrumentId, raw: &str) -> Reply {
        let def = instrument(id);
        let index = session.profile.scores(id).len();

        let Some(score) = parse_option(raw, def.options()) else {
            return Reply::message(MSG_PICK_AN_OPTION).with_prompt(item_prompt(id, index));
        };

        session.profile.scores_mut(id).push(score);
        let mut reply = Reply::message(format!("✅ Jawaban Anda: {score}"));

        let answered = session.profile.scores(id).len();
        if answered < def.item_count() {
            return reply.with_prompt(item_prompt(id, answered));
        }

        match id.next() {
            Some(next) => {
                session.state = ConversationState::Questionnaire(next);
                reply.with_prompt(item_prompt(next, 0))
            }
            None => {
                // NAQ-R scored block done; the trailing items are unscored.
                session.state = ConversationState::NaqrExperience;
                reply.with_prompt(experience_prompt())
            }
        }
    }

    fn record_experience(&self, session: &mut Session, raw: &str) -> Reply {
        let Some(value) = parse_option(raw, &naqr::EXPERIENCE_OPTIONS) else {
            return Reply::message(MSG_PICK_AN_OPTION).with_prompt(experience_prompt());
        };
        session.profile.naqr_experience = Some(value);
        let label = naqr::EXPERIENCE_OPTIONS
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
            .unwrap_or("-");
        let reply = Reply::message(format!("✅ Jawaban Anda: {label}"));
        session.state = ConversationState::NaqrActors;
        reply.with_prompt(actors_prompt())
    }

    fn record_bully_actors(&self, session: &mut Session, value: String) -> Reply {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Reply::default().with_prompt(actors_prompt());
        }
        session.profile.naqr_bully_actors = Some(value);
        session.state = ConversationState::NaqrCount;
        Reply::default().with_prompt(Prompt::text_only(naqr::COUNT_QUESTION))
    }

    async fn record_bully_count(&self, session: &mut Session, value: String) -> Reply {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Reply::default().with_prompt(Prompt::text_only(naqr::COUNT_QUESTION));
        }
        session.profile.naqr_bully_count = Some(value);
        self.finalize_run(session).await
    }

    /// Terminal step: score everything, persist, summarize.
    async fn finalize_run(&self, session: &mut Session) -> Reply {
        let scores = RunScores::from_profile(&session.profile);

        match session.profile.account_id {
            Some(user_id) => {
                let record = scores.to_record(user_id);
                // A failed save only logs: the summary is still shown and the
                // result stays in memory for this session.
                match self.results.save_result(&record).await {
                    Ok(result_id) => info!(user_id, result_id, "health results saved"),
                    Err(e) => error!(user_id, error = %e, "failed to save health results"),
                }
                session.profile.health_results.insert(0, record);
            }
            None => warn!("session has no account id, health results not saved"),
        }

        session.profile.completed = true;
        session.state = ConversationState::Completed;
        Reply::message(summary::render_summary(&scores, &session.profile))
    }

    // ── Open chat ────────────────────────────────────────────────────────────

    async fn chat(&self, session: &Session, question: &str) -> Reply {
        let profile = &session.profile;
        if !profile.completed && profile.role != Role::Admin {
            return Reply::message("Silakan selesaikan profiling terlebih dahulu dengan /start");
        }

        let context = build_profile_context(profile);
        match self.assistant.answer(question, &context).await {
            Ok(answer) => Reply::message(answer),
            Err(e) => {
                error!(error = %e, "assistant call failed");
                Reply::message("Maaf, terjadi kesalahan saat memproses pesan Anda.")
            }
        }
    }
}

// ── Prompt construction ──────────────────────────────────────────────────────

fn account_prompt() -> Prompt {
    Prompt {
        text: "Selamat datang di Chatbot Psiko!\n\n\
               Untuk melanjutkan, silakan login atau daftar jika Anda belum memiliki akun."
            .to_string(),
        choices: vec![
            Choice {
                label: "Sudah punya akun (Login)".to_string(),
                value: "login".to_string(),
            },
            Choice {
                label: "Belum punya akun (Daftar)".to_string(),
                value: "register".to_string(),
            },
        ],
    }
}

fn field_prompt(field: BiodataField) -> Prompt {
    let choices = field
        .options()
        .map(|options| {
            options
                .iter()
                .map(|o| Choice {
                    label: o.to_string(),
                    value: o.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    Prompt {
        text: field.prompt().to_string(),
        choices,
    }
}

fn item_prompt(id: InstrumentId, index: usize) -> Prompt {
    let text = catalog::question(id, index).expect("item index within instrument range");
    let choices = catalog::options(id)
        .iter()
        .map(|o| Choice {
            label: format!("{} ({})", o.label, o.value),
            value: o.value.to_string(),
        })
        .collect();
    Prompt { text, choices }
}

fn experience_prompt() -> Prompt {
    Prompt {
        text: naqr::EXPERIENCE_QUESTION.to_string(),
        choices: naqr::EXPERIENCE_OPTIONS
            .iter()
            .map(|o| Choice {
                label: o.label.to_string(),
                value: o.value.to_string(),
            })
            .collect(),
    }
}

fn actors_prompt() -> Prompt {
    let mut text = String::from(naqr::ACTORS_QUESTION);
    for actor in naqr::BULLY_ACTORS {
        text.push_str(&format!("\n• {actor}"));
    }
    Prompt::text_only(text)
}

fn parse_option(raw: &str, options: &[AnswerOption]) -> Option<i32> {
    let value: i32 = raw.trim().parse().ok()?;
    options.iter().any(|o| o.value == value).then_some(value)
}
