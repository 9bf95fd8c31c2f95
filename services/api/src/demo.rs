use crate::infra::Stores;
use chrono::{Duration, Utc};
use clap::{Args, ValueEnum};
use lostfound::error::AppError;
use lostfound::repository::Repository;
use lostfound::workflows::claims::{
    orphaned_claims, ClaimQuery, ClaimSortKey, ClaimSubmission, ItemIndex, SortDirection,
};
use lostfound::workflows::feedback::ContactSubmission;
use lostfound::workflows::items::{FoundItemReport, LostItemReport};
use lostfound::workflows::users::{User, UserId, UserRole, UserStatus};
use std::fmt::Display;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Filter the admin claim listing (matches claimant, message, item title or claim id)
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Column to order the admin claim listing by
    #[arg(long, value_enum)]
    pub(crate) sort: Option<DemoSort>,
    /// Order the listing descending instead of ascending
    #[arg(long)]
    pub(crate) descending: bool,
    /// Keep every item; skip the deletion that orphans a claim
    #[arg(long)]
    pub(crate) keep_items: bool,
    /// Print the final claim listing as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoSort {
    Claimant,
    Item,
    Date,
    Status,
    Id,
}

impl From<DemoSort> for ClaimSortKey {
    fn from(value: DemoSort) -> Self {
        match value {
            DemoSort::Claimant => ClaimSortKey::ClaimantName,
            DemoSort::Item => ClaimSortKey::ItemName,
            DemoSort::Date => ClaimSortKey::DateClaimed,
            DemoSort::Status => ClaimSortKey::Status,
            DemoSort::Id => ClaimSortKey::Id,
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        search,
        sort,
        descending,
        keep_items,
        json,
    } = args;

    let stores = Stores::default();
    let catalog = stores.catalog();
    let claims = stores.claim_service();
    let feedback = stores.feedback_service();
    let users = stores.user_service();
    let dashboard = stores.dashboard();
    let start = Utc::now() - Duration::days(3);

    println!("Campus lost & found demo");

    let Some(textbook) = step(
        "report lost item",
        catalog.report_lost_at(
            LostItemReport {
                title: Some("Calculus textbook".to_string()),
                category: Some("Books".to_string()),
                location: Some("Science building".to_string()),
                ..LostItemReport::default()
            },
            start,
        ),
    ) else {
        return Ok(());
    };
    let Some(watch) = step(
        "report found item",
        catalog.report_found_at(found_report("Silver watch", "Gym lockers"), start),
    ) else {
        return Ok(());
    };
    let Some(umbrella) = step(
        "report found item",
        catalog.report_found_at(
            found_report("Blue umbrella", "Library entrance"),
            start + Duration::hours(5),
        ),
    ) else {
        return Ok(());
    };
    println!(
        "- Catalog: lost {} | found {}, {}",
        textbook.title, watch.title, umbrella.title
    );

    let submissions = [
        (watch.id.as_str(), "Jordan Lee", "Engraved J.L. on the clasp"),
        (umbrella.id.as_str(), "Riley Park", "Has a broken spoke near the handle"),
        (textbook.id.as_str(), "Avery Cruz", "My name is on the inside cover"),
        ("X123", "A. Student", "This is mine"),
    ];
    let mut submitted = Vec::new();
    for (offset, (item_id, name, message)) in submissions.into_iter().enumerate() {
        let submission = ClaimSubmission {
            item_id: Some(item_id.to_string()),
            claimant_name: Some(name.to_string()),
            contact: Some("555-0100".to_string()),
            message: Some(message.to_string()),
        };
        let claimed_at = start + Duration::hours(12 + offset as i64);
        if let Some(claim) = step("submit claim", claims.submit_at(submission, claimed_at)) {
            println!(
                "- Claim {} by {} for {} -> {}",
                claim.id,
                claim.claimant_name,
                claim.item_id,
                claim.status.label()
            );
            submitted.push(claim);
        }
    }

    if let Some(first) = submitted.first() {
        if let Some(approved) = step(
            "approve claim",
            claims.update_status(&first.id, Some("approved")),
        ) {
            println!("- {} approved", approved.id);
        }
        match claims.update_status(&first.id, Some("maybe")) {
            Ok(claim) => println!("- Unexpected transition to {}", claim.status.label()),
            Err(err) => println!("- Status 'maybe' refused: {err}"),
        }
    }
    if let Some(second) = submitted.get(1) {
        if let Some(rejected) = step(
            "reject claim",
            claims.update_status(&second.id, Some("rejected")),
        ) {
            println!("- {} rejected", rejected.id);
        }
    }

    if let Some(item) = step(
        "hand in watch",
        catalog.set_found_status(&watch.id, "Found and Submitted"),
    ) {
        println!("- {} custody -> {}", item.title, item.status.label());
    }

    if !keep_items && step("delete item", catalog.delete_found(&watch.id)).is_some() {
        println!("- Deleted {} ({})", watch.title, watch.id);
    }

    if let Some(message) = step(
        "submit feedback",
        feedback.submit(ContactSubmission {
            name: Some("Dana Reyes".to_string()),
            email: Some("Dana.Reyes@Campus.edu".to_string()),
            subject: Some("Umbrella pickup".to_string()),
            message: Some("When is the office open?".to_string()),
        }),
    ) {
        println!("- Feedback {} from {}", message.id, message.email);
    }

    for (offset, (id, name)) in [("user-1", "Jordan Lee"), ("user-2", "Sam Ortiz")]
        .into_iter()
        .enumerate()
    {
        let joined = start + Duration::minutes(offset as i64);
        let account = User {
            id: UserId(id.to_string()),
            name: name.to_string(),
            email: format!("{id}@campus.edu"),
            password: "registered-elsewhere".to_string(),
            student_id: format!("S-{:04}", offset + 1),
            role: UserRole::User,
            status: UserStatus::Active,
            created_at: joined,
            updated_at: joined,
        };
        step("seed account", stores.users.insert(account));
    }
    if let Some(account) = step(
        "suspend account",
        users.update_status(&UserId("user-2".to_string()), Some("suspended")),
    ) {
        println!("- Account {} -> {}", account.name, account.status.label());
    }

    let query = ClaimQuery {
        search,
        sort: sort.map(ClaimSortKey::from),
        direction: Some(if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }),
    };
    let listing = dashboard.claims(&query)?;

    let all_claims = claims.list().unwrap_or_default();
    let index = ItemIndex::build(
        &catalog.lost_items().unwrap_or_default(),
        &catalog.found_items().unwrap_or_default(),
    );
    let hidden = orphaned_claims(&all_claims, &index);

    println!("\nAdmin claim listing ({} shown, {} hidden)", listing.len(), hidden.len());
    if json {
        match serde_json::to_string_pretty(&listing) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("  Listing unavailable: {err}"),
        }
    } else {
        for view in &listing {
            println!(
                "  - {} | {} | {} | {} | {}",
                view.claim.id,
                view.claim.claimant_name,
                view.item.title,
                view.claim.date_claimed.format("%Y-%m-%d %H:%M"),
                view.claim.status.label()
            );
        }
    }
    for claim in hidden {
        println!("  (hidden) {} references missing item {}", claim.id, claim.item_id);
    }

    let stats = dashboard.stats()?;
    println!("\nDashboard stats");
    println!(
        "- {} lost | {} found | {} users | {} claims ({} pending) | {} contacts ({} pending)",
        stats.total_lost,
        stats.total_found,
        stats.total_users,
        stats.total_claims,
        stats.pending_claims,
        stats.total_contacts,
        stats.pending_feedbacks
    );

    Ok(())
}

fn found_report(title: &str, location: &str) -> FoundItemReport {
    FoundItemReport {
        title: Some(title.to_string()),
        description: Some("Turned in to campus security".to_string()),
        category: Some("Accessories".to_string()),
        location: Some(location.to_string()),
        contact: Some("security@campus.edu".to_string()),
        ..FoundItemReport::default()
    }
}

fn step<T, E: Display>(label: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            println!("  {label} failed: {err}");
            None
        }
    }
}
