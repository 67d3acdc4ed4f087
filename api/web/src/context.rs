use std::sync::Arc;

use ep_dao::Db;

use crate::{auth::AuthGate, template::Templates};

pub struct ApiWebCtx {
    auth: AuthGate,
    dao: ApiWebDaoCtx,
    template: Templates,
}

impl ApiWebCtx {
    pub fn new(auth: AuthGate, dao: ApiWebDaoCtx, template: Templates) -> Self {
        Self {
            auth,
            dao,
            template,
        }
    }

    pub fn auth(&self) -> &AuthGate {
        &self.auth
    }

    pub fn dao(&self) -> &ApiWebDaoCtx {
        &self.dao
    }

    pub fn template(&self) -> &Templates {
        &self.template
    }
}

pub struct ApiWebDaoCtx {
    db: Arc<Db>,
}

impl ApiWebDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}
