//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::categories::CategoriesPage;
use crate::pages::category_courses::CategoryCoursesPage;
use crate::pages::course::CoursePage;
use crate::pages::create_course::CreateCoursePage;
use crate::pages::edit_course::EditCoursePage;
use crate::pages::explore::ExplorePage;
use crate::pages::landing::LandingPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signin::SignInPage;
use crate::pages::signup::SignUpPage;
use crate::state::auth::AuthState;
use crate::state::guard::{GuardConfig, Protected};
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Rehydrates the persisted session, provides the auth store and guard
/// configuration as contexts, and sets up client-side routing. The session
/// is initialized before the router's first render so no guard evaluation
/// ever sees a pre-initialize state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut initial = AuthState::default();
    initial.initialize(&BrowserStorage);
    let auth = RwSignal::new(initial);

    provide_context(auth);
    provide_context(GuardConfig::default());

    view! {
        <Title text="EdCourse"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("explore") view=ExplorePage/>
                    <Route
                        path=(StaticSegment("course"), ParamSegment("id"))
                        view=CoursePage
                    />
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route
                        path=(StaticSegment("category"), ParamSegment("name"))
                        view=CategoryCoursesPage
                    />
                    <Route
                        path=StaticSegment("create")
                        view=|| view! { <Protected><CreateCoursePage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <Protected><EditCoursePage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Protected><ProfilePage/></Protected> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
