pub const PAGE: &str = "relative min-h-screen w-full bg-gradient-to-br from-gray-950 via-indigo-950 to-gray-900 px-4 py-8 overflow-hidden";
pub const PAGE_INNER: &str = "relative z-10 max-w-6xl mx-auto";
pub const CARD: &str = "bg-white/5 backdrop-blur-lg border border-white/10 rounded-2xl shadow-2xl p-6";
pub const CARD_ITEM: &str = "flex items-center gap-4 p-4 rounded-xl bg-white/5 border border-white/10";
pub const ALERT_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-3 text-sm text-red-200";

pub const TEXT_H1: &str = "text-4xl font-bold text-center text-transparent bg-clip-text bg-gradient-to-r from-yellow-300 via-orange-400 to-pink-500";
pub const TEXT_H2: &str = "text-2xl font-semibold text-gray-100";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-400";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-gray-900/80 py-2 px-3 text-white shadow-sm ring-1 ring-inset ring-gray-700 placeholder:text-gray-500 focus:ring-2 focus:ring-purple-500";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center gap-2 px-6 py-3 rounded-xl font-semibold text-white bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 shadow-lg transition-all duration-300 disabled:from-gray-600 disabled:to-gray-700 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center gap-2 px-4 py-2 rounded-lg font-medium text-gray-200 border border-white/20 hover:bg-white/10 transition-colors duration-200";
pub const BUTTON_ICON: &str = "p-2 text-gray-300 hover:text-white rounded-lg hover:bg-white/10 transition-colors duration-200";
pub const BUTTON_DANGER_ICON: &str = "p-2 text-red-400 hover:text-red-300 rounded-lg hover:bg-red-500/10 transition-colors duration-200";

pub const BADGE: &str = "px-4 py-1 rounded-full text-sm font-semibold bg-white/10 text-gray-200";
pub const TOKEN_CHIP: &str = "px-3 py-1 rounded-lg text-sm font-medium bg-purple-500/20 text-purple-200";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4";
pub const MODAL: &str = "w-full max-w-lg max-h-[80vh] overflow-y-auto rounded-2xl bg-gray-900 border border-white/10 shadow-2xl";

pub const CUSTOM_CSS: &str = r#"
@keyframes fadeIn {
    0% { opacity: 0; transform: translateY(12px); }
    100% { opacity: 1; transform: translateY(0); }
}

.animate-fadeIn {
    animation: fadeIn 0.5s ease-in-out;
}

@keyframes firefly-drift {
    0% { transform: translate(0, 0); }
    25% { transform: translate(18px, -24px); }
    50% { transform: translate(-12px, -40px); }
    75% { transform: translate(-26px, -12px); }
    100% { transform: translate(0, 0); }
}

@keyframes firefly-glow {
    0%, 100% { opacity: var(--firefly-min-opacity); }
    50% { opacity: var(--firefly-max-opacity); }
}

.firefly {
    position: absolute;
    border-radius: 9999px;
    background: #c1d8f0;
    box-shadow: 0 0 8px 2px rgba(193, 216, 240, 0.6);
    animation-name: firefly-drift, firefly-glow;
    animation-iteration-count: infinite;
    animation-timing-function: ease-in-out;
}

@keyframes merge-right {
    100% { transform: translateX(120px) scale(0.95); }
}

@keyframes merge-left {
    100% { transform: translateX(-120px) scale(0.95); }
}

.animate-merge-left { animation: merge-left 0.6s ease-in forwards; }
.animate-merge-right { animation: merge-right 0.6s ease-in forwards; }
"#;
