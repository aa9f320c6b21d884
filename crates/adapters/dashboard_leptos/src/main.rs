use godoksa_dashboard_leptos::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
