use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let user = factory::create_user(db).await?;
    MessageFactory::new(db, &user.discord_id)
        .public_id("welcome")
        .public("Cozy Welcome", "welcome")
        .tags(&["cozy", "gaming"])
        .keywords(&["friendly", "server"])
        .build()
        .await?;
    MessageFactory::new(db, &user.discord_id)
        .public_id("rules00")
        .public("Server Rules", "announcement")
        .tags(&["rules"])
        .keywords(&["moderation"])
        .build()
        .await?;
    MessageFactory::new(db, &user.discord_id)
        .public_id("private")
        .build()
        .await?;

    Ok(())
}

fn ids(messages: &[crate::server::model::message::SavedMessage]) -> Vec<&str> {
    let mut ids: Vec<&str> = messages.iter().map(|m| m.public_id.as_str()).collect();
    ids.sort();
    ids
}

/// Tests the unfiltered community listing.
///
/// Expected: Ok with both public messages and never the private one
#[tokio::test]
async fn lists_only_public_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = MessageRepository::new(db);

    assert_eq!(ids(&repo.get_public().await?), vec!["rules00", "welcome"]);
    assert_eq!(
        ids(&repo.search_public(&SearchMessagesParam::default()).await?),
        vec!["rules00", "welcome"]
    );

    Ok(())
}

/// Tests searching by token against titles and keywords.
///
/// Expected: title substring and exact keyword matches are both found
#[tokio::test]
async fn matches_title_or_keyword() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = MessageRepository::new(db);
    let by_title = repo
        .search_public(&SearchMessagesParam {
            tokens: vec!["rules".to_string()],
            ..Default::default()
        })
        .await?;
    let by_keyword = repo
        .search_public(&SearchMessagesParam {
            tokens: vec!["friendly".to_string()],
            ..Default::default()
        })
        .await?;
    let by_both = repo
        .search_public(&SearchMessagesParam {
            tokens: vec!["server".to_string()],
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&by_title), vec!["rules00"]);
    assert_eq!(ids(&by_keyword), vec!["welcome"]);
    assert_eq!(ids(&by_both), vec!["rules00", "welcome"]);

    Ok(())
}

/// Tests category and tag filters.
///
/// Verifies that the category must match exactly and that every requested tag must
/// be present on the message.
///
/// Expected: only messages matching all filters are returned
#[tokio::test]
async fn filters_by_category_and_all_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = MessageRepository::new(db);
    let welcome = repo
        .search_public(&SearchMessagesParam {
            category: Some(MessageType::Welcome),
            ..Default::default()
        })
        .await?;
    let both_tags = repo
        .search_public(&SearchMessagesParam {
            tags: vec!["cozy".to_string(), "gaming".to_string()],
            ..Default::default()
        })
        .await?;
    let missing_tag = repo
        .search_public(&SearchMessagesParam {
            tags: vec!["cozy".to_string(), "rules".to_string()],
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&welcome), vec!["welcome"]);
    assert_eq!(ids(&both_tags), vec!["welcome"]);
    assert!(missing_tag.is_empty());

    Ok(())
}
