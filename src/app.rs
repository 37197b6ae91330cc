use leptos::*;

use crate::presentation::{MapView, PredictionModal, flow};

/// 🦀 Root component: state map + prediction modal
#[component]
pub fn App() -> impl IntoView {
    flow::load_regions();

    view! {
        <style>
            {r#"
            .home-price-app {
                font-family: 'Orbitron', 'SF Pro Display', -apple-system, sans-serif;
                background: radial-gradient(ellipse at center, #0a0a0a 0%, #000000 100%);
                min-height: 100vh;
                padding: 24px 16px;
                color: #67e8f9;
                box-sizing: border-box;
            }

            .app-title {
                text-align: center;
                margin: 0 0 24px;
                text-shadow: 0 0 6px #00ffff;
            }

            .map-container {
                position: relative;
                max-width: 1200px;
                margin: 0 auto;
                border-radius: 12px;
                overflow: hidden;
                box-shadow: 0 0 30px #00ffff88;
                background-image:
                    linear-gradient(rgba(0, 255, 255, 0.1) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(0, 255, 255, 0.1) 1px, transparent 1px);
                background-size: 40px 40px;
            }

            .map-svg {
                display: block;
                width: 100%;
                aspect-ratio: 12 / 7;
                cursor: grab;
                user-select: none;
            }

            .map-svg:active {
                cursor: grabbing;
            }

            .region {
                cursor: pointer;
            }

            .map-overlay {
                position: absolute;
                top: 12px;
                left: 12px;
                display: flex;
                flex-direction: column;
                gap: 6px;
                pointer-events: none;
            }

            .hover-label, .map-status {
                background: rgba(0, 0, 0, 0.75);
                border: 1px solid #00ffff55;
                border-radius: 6px;
                padding: 4px 10px;
                font-size: 13px;
            }

            .attribution {
                position: absolute;
                right: 6px;
                bottom: 4px;
                font-size: 10px;
                color: #9ca3af;
            }

            .modal-backdrop {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.65);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1000;
            }

            .modal {
                background: #0b0f14;
                border: 1px solid #00ffff77;
                box-shadow: 0 0 20px #00ffff55;
                border-radius: 12px;
                padding: 20px 24px;
                width: min(420px, 92vw);
            }

            .modal-title {
                margin: 0 0 16px;
            }

            .prediction-form {
                display: flex;
                flex-direction: column;
                gap: 14px;
            }

            .text-field, .slider-field {
                display: flex;
                flex-direction: column;
                gap: 6px;
                font-size: 14px;
            }

            .text-field input {
                background: #111827;
                color: #e0f2fe;
                border: 1px solid #00ffff55;
                border-radius: 6px;
                padding: 8px;
            }

            .slider-field input {
                accent-color: #22d3ee;
            }

            .form-error {
                color: #f87171;
                margin: 0;
                font-size: 13px;
            }

            .modal-actions {
                display: flex;
                gap: 10px;
                justify-content: flex-end;
            }

            .primary-btn, .secondary-btn {
                border-radius: 6px;
                padding: 8px 14px;
                cursor: pointer;
                border: 2px solid #22d3ee;
                font-family: inherit;
            }

            .primary-btn {
                background: #22d3ee;
                color: #000;
            }

            .secondary-btn {
                background: transparent;
                color: #22d3ee;
            }

            button:disabled {
                opacity: 0.5;
                cursor: not-allowed;
            }

            .spinner {
                align-self: center;
                width: 32px;
                height: 32px;
                border: 3px solid #00ffff33;
                border-top-color: #22d3ee;
                border-radius: 50%;
                animation: spin 0.8s linear infinite;
            }

            @keyframes spin {
                to { transform: rotate(360deg); }
            }

            .result-panel {
                text-align: center;
            }

            .result-label {
                margin: 0;
                color: #9ca3af;
            }

            .result-value {
                font-size: 32px;
                font-weight: 700;
                margin: 8px 0;
                text-shadow: 0 0 10px #00ffff;
            }

            .result-detail {
                margin: 0 0 16px;
                font-size: 13px;
            }
            "#}
        </style>
        <main class="home-price-app">
            <h2 class="app-title">"Explore the U.S. Housing Market"</h2>
            <MapView/>
            <PredictionModal/>
        </main>
    }
}
