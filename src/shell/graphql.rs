use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::attendance::core::actor::Actor;
use crate::shell::actor::ActorRejection;

pub use crate::modules::attendance::use_cases::month_summary::inbound::graphql::QueryRoot;
pub use crate::modules::attendance::use_cases::submit_month_closure::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Resolvers read the caller from request data; anonymous requests fail there.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    actor: Result<Actor, ActorRejection>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Ok(actor) = actor {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
