use api::auth::{
    hash_password, validate_password, validate_username, verify_password, SessionUser,
    SESSION_LOGIN_ERROR_KEY, SESSION_REGISTER_ERROR_KEY, SESSION_SEARCH_KEY, SESSION_USER_KEY,
};
use axum::{
    extract::State,
    response::{Html, Redirect, Response},
    Form,
};
use chrono::Utc;
use store::{accessible_notes, lifecycle, search_notes, Created, SearchQuery, StoreError};
use tower_sessions::Session;
use tracing::{debug, info};
use ui::DashboardView;

use crate::app::AppState;
use crate::error::AppError;
use crate::forms::{field, note_draft, selected_users, Credentials, Fields, SearchForm};
use crate::session::{moved_permanently, set_flash, take_flash, CurrentUser};

const USER_EXISTS: &str = "User Already Exists.";
const INCORRECT_USERNAME: &str = "Incorrect Username";
const INCORRECT_PASSWORD: &str = "Incorrect Password";

pub async fn index(CurrentUser(_): CurrentUser) -> Response {
    moved_permanently("/dashboard")
}

pub async fn login_page(session: Session) -> Result<Html<String>, AppError> {
    let error = take_flash(&session, SESSION_LOGIN_ERROR_KEY).await?;
    Ok(Html(ui::render_login(error)))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(credentials): Form<Credentials>,
) -> Result<Redirect, AppError> {
    let Some(user) = state.store.find_user(&credentials.username).await? else {
        set_flash(&session, SESSION_LOGIN_ERROR_KEY, INCORRECT_USERNAME.into()).await?;
        return Ok(Redirect::to("/login"));
    };

    if !verify_password(&credentials.password, &user.password_hash)? {
        set_flash(&session, SESSION_LOGIN_ERROR_KEY, INCORRECT_PASSWORD.into()).await?;
        return Ok(Redirect::to("/login"));
    }

    session.cycle_id().await?;
    session
        .insert(SESSION_USER_KEY, SessionUser::from(&user))
        .await?;
    info!("{} logged in", user.username);
    Ok(Redirect::to("/dashboard"))
}

pub async fn register_page(session: Session) -> Result<Html<String>, AppError> {
    let error = take_flash(&session, SESSION_REGISTER_ERROR_KEY).await?;
    Ok(Html(ui::render_register(error)))
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(credentials): Form<Credentials>,
) -> Result<Redirect, AppError> {
    let valid = validate_username(&credentials.username)
        .and_then(|_| validate_password(&credentials.password));
    if let Err(e) = valid {
        set_flash(&session, SESSION_REGISTER_ERROR_KEY, e.to_string()).await?;
        return Ok(Redirect::to("/register"));
    }

    if state.store.find_user(&credentials.username).await?.is_some() {
        set_flash(&session, SESSION_REGISTER_ERROR_KEY, USER_EXISTS.into()).await?;
        return Ok(Redirect::to("/register"));
    }

    let hash = hash_password(&credentials.password)?;
    match state.store.create_user(&credentials.username, &hash).await {
        Ok(user) => {
            info!("registered {} as user {}", user.username, user.id);
            Ok(Redirect::to("/login"))
        }
        Err(StoreError::UsernameTaken(_)) => {
            set_flash(&session, SESSION_REGISTER_ERROR_KEY, USER_EXISTS.into()).await?;
            Ok(Redirect::to("/register"))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    if let Some(user) = session.get::<SessionUser>(SESSION_USER_KEY).await? {
        info!("{} logged out", user.username);
    }
    session.flush().await?;
    Ok(Redirect::to("/login"))
}

pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    session: Session,
) -> Result<Html<String>, AppError> {
    let settings = state.store.settings(user.id).await?;
    let users = state.store.list_users_except(&user.username).await?;
    let query = session
        .get::<SearchQuery>(SESSION_SEARCH_KEY)
        .await?
        .unwrap_or_default();

    let notes = accessible_notes(user.id, state.store.list_notes().await?);
    let notes = search_notes(notes, &query);

    let view = DashboardView::new(&user, settings, &users, notes, query);
    Ok(Html(ui::render_dashboard(view)))
}

pub async fn search(
    CurrentUser(user): CurrentUser,
    session: Session,
    Form(form): Form<SearchForm>,
) -> Result<Redirect, AppError> {
    let query = SearchQuery::from_form(&form.keyword, &form.user, &form.date, &form.flag)?;
    debug!("{} searches with {query:?}", user.username);
    session.insert(SESSION_SEARCH_KEY, query).await?;
    Ok(Redirect::to("/dashboard"))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(fields): Form<Fields>,
) -> Result<Redirect, AppError> {
    let users = state.store.list_users_except(&user.username).await?;
    let draft = note_draft("create", &users, &fields)?;

    match lifecycle::create_note(&*state.store, user.id, draft, Utc::now()).await? {
        Created::Inserted => info!("{} created a note", user.username),
        Created::Duplicate => debug!("{} tried to create a duplicate note", user.username),
    }
    Ok(Redirect::to("/dashboard"))
}

pub async fn edit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(fields): Form<Fields>,
) -> Result<Redirect, AppError> {
    let users = state.store.list_users_except(&user.username).await?;
    let target = field(&fields, "edit-select-note");
    let draft = note_draft("edit", &users, &fields)?;

    let changed = lifecycle::edit_note(&*state.store, target, draft, Utc::now()).await?;
    info!("{} edited {changed} note(s) named {target:?}", user.username);
    Ok(Redirect::to("/dashboard"))
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(fields): Form<Fields>,
) -> Result<Redirect, AppError> {
    let name = field(&fields, "delete-select-note");

    let removed = lifecycle::delete_note(&*state.store, user.id, name).await?;
    info!("{} deleted {removed} note(s) named {name:?}", user.username);
    Ok(Redirect::to("/dashboard"))
}

pub async fn edit_settings(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(fields): Form<Fields>,
) -> Result<Redirect, AppError> {
    let users = state.store.list_users_except(&user.username).await?;
    let colleagues = selected_users("settings", &users, &fields)?;
    if colleagues.is_empty() {
        return Ok(Redirect::to("/dashboard"));
    }

    let settings = state.store.settings(user.id).await?;
    state.store.set_colleagues(settings.id, colleagues).await?;
    info!("{} updated their colleagues", user.username);
    Ok(Redirect::to("/dashboard"))
}
