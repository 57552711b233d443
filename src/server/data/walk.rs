//! Walk data repository for database operations.
//!
//! Every read returns walks joined with their region and difficulty. Relations
//! are fetched in one batched query per table and matched up in memory.

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::walk::{
    CreateWalkParam, FilterField, SortField, UpdateWalkParam, Walk, WalkQuery,
};

/// Repository providing database operations for walks.
pub struct WalkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalkRepository<'a> {
    /// Creates a new WalkRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WalkRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of walks matching the query.
    ///
    /// Filtering compares the lower-cased column against the query text with
    /// `LIKE '%text%' ESCAPE '\\'`, so `%` and `_` in the text match literally.
    /// Rows are ordered by the requested sort column, with the walk id as tiebreaker
    /// so page boundaries are stable. A page whose offset cannot be represented is
    /// empty.
    ///
    /// # Arguments
    /// - `query` - Optional filter and sort plus the page to return
    ///
    /// # Returns
    /// - `Ok(Vec<Walk>)` - Walks on the requested page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, query: WalkQuery) -> Result<Vec<Walk>, DbErr> {
        let page = query.page_number.saturating_sub(1);
        let in_range = page
            .checked_mul(query.page_size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Ok(Vec::new());
        }

        let mut select = entity::prelude::Walk::find();

        if let Some(filter) = query.filter {
            let column = match filter.field {
                FilterField::Name => entity::walk::Column::Name,
                FilterField::Description => entity::walk::Column::Description,
            };

            select = select.filter(
                Expr::expr(Func::lower(Expr::col((entity::walk::Entity, column))))
                    .like(LikeExpr::new(like_pattern(&filter.query)).escape('\\')),
            );
        }

        if let Some(sort) = query.sort {
            let column = match sort.field {
                SortField::Name => entity::walk::Column::Name,
                SortField::Length => entity::walk::Column::LengthInKm,
            };
            let order = if sort.ascending { Order::Asc } else { Order::Desc };

            select = select.order_by(column, order);
        }

        let walks = select
            .order_by_asc(entity::walk::Column::Id)
            .paginate(self.db, query.page_size)
            .fetch_page(page)
            .await?;

        self.with_relations(walks).await
    }

    /// Gets a walk by id with its region and difficulty.
    ///
    /// # Arguments
    /// - `id` - Walk id
    ///
    /// # Returns
    /// - `Ok(Some(Walk))` - Walk found
    /// - `Ok(None)` - No walk with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>, DbErr> {
        let Some(walk) = entity::prelude::Walk::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![walk]).await?.pop())
    }

    /// Creates a walk with a freshly generated id.
    ///
    /// # Arguments
    /// - `param` - Walk fields including region and difficulty ids
    ///
    /// # Returns
    /// - `Ok(Walk)` - The created walk with its relations
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    ///   when the region or difficulty does not exist
    pub async fn create(&self, param: CreateWalkParam) -> Result<Walk, DbErr> {
        let walk = entity::walk::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            length_in_km: ActiveValue::Set(param.length_in_km),
            walk_image_url: ActiveValue::Set(param.walk_image_url),
            region_id: ActiveValue::Set(param.region_id),
            difficulty_id: ActiveValue::Set(param.difficulty_id),
        }
        .insert(self.db)
        .await?;

        self.single_with_relations(walk).await
    }

    /// Overwrites every mutable field of an existing walk.
    ///
    /// # Arguments
    /// - `param` - Walk id and the new field values
    ///
    /// # Returns
    /// - `Ok(Some(Walk))` - The updated walk with its relations
    /// - `Ok(None)` - No walk with this id
    /// - `Err(DbErr)` - Database error during update, including foreign key violations
    pub async fn update(&self, param: UpdateWalkParam) -> Result<Option<Walk>, DbErr> {
        let Some(existing) = entity::prelude::Walk::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut walk: entity::walk::ActiveModel = existing.into();
        walk.name = ActiveValue::Set(param.name);
        walk.description = ActiveValue::Set(param.description);
        walk.length_in_km = ActiveValue::Set(param.length_in_km);
        walk.walk_image_url = ActiveValue::Set(param.walk_image_url);
        walk.region_id = ActiveValue::Set(param.region_id);
        walk.difficulty_id = ActiveValue::Set(param.difficulty_id);

        let updated = walk.update(self.db).await?;

        Ok(Some(self.single_with_relations(updated).await?))
    }

    /// Deletes a walk and returns it as it was before deletion.
    ///
    /// # Arguments
    /// - `id` - Walk id
    ///
    /// # Returns
    /// - `Ok(Some(Walk))` - The deleted walk with its relations
    /// - `Ok(None)` - No walk with this id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<Option<Walk>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Walk::delete_by_id(id).exec(self.db).await?;

        Ok(Some(existing))
    }

    async fn single_with_relations(&self, walk: entity::walk::Model) -> Result<Walk, DbErr> {
        let id = walk.id;

        self.with_relations(vec![walk])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!(
                "Walk with id {} not found after write",
                id
            )))
    }

    /// Attaches region and difficulty to each walk, preserving input order.
    async fn with_relations(&self, walks: Vec<entity::walk::Model>) -> Result<Vec<Walk>, DbErr> {
        if walks.is_empty() {
            return Ok(Vec::new());
        }

        let region_ids: Vec<Uuid> = walks.iter().map(|w| w.region_id).collect();
        let difficulty_ids: Vec<Uuid> = walks.iter().map(|w| w.difficulty_id).collect();

        let regions: HashMap<Uuid, entity::region::Model> = entity::prelude::Region::find()
            .filter(entity::region::Column::Id.is_in(region_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let difficulties: HashMap<Uuid, entity::difficulty::Model> =
            entity::prelude::Difficulty::find()
                .filter(entity::difficulty::Column::Id.is_in(difficulty_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|d| (d.id, d))
                .collect();

        walks
            .into_iter()
            .map(|walk| {
                let region = regions.get(&walk.region_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Region {} of walk {}", walk.region_id, walk.id))
                })?;
                let difficulty = difficulties
                    .get(&walk.difficulty_id)
                    .cloned()
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "Difficulty {} of walk {}",
                            walk.difficulty_id, walk.id
                        ))
                    })?;

                Ok(Walk::from_entity(walk, region, difficulty))
            })
            .collect()
    }
}

/// Wraps `text` in `%` wildcards, escaping the LIKE metacharacters it contains.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');

    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}
